use super::*;
use crate::distribution::bin;

fn one_to_ten() -> Distribution<f64> {
    let items: Vec<f64> = (1..=10).map(f64::from).collect();
    bin(items, |x| *x, 1.0, 10.0, 3).unwrap()
}

fn plain(bar_width: usize) -> TextFormatter {
    TextFormatter::new(ColorMode::Never).with_bar_width(bar_width)
}

#[test]
fn header_and_rows() {
    let output = plain(4).format(&one_to_ten()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Range      Count    Share");
    assert_eq!(lines[1], format!("[1, 4){}3   30.00%  ###", " ".repeat(9)));
    assert_eq!(lines[2], format!("[4, 7){}3   30.00%  ###", " ".repeat(9)));
    assert_eq!(lines[3], format!("[7, 10]{}4   40.00%  ####", " ".repeat(8)));
}

#[test]
fn last_bucket_is_shown_closed() {
    let output = plain(10).format(&one_to_ten()).unwrap();
    assert!(output.contains("[7, 10]"));
    assert!(!output.contains("[7, 10)"));
}

#[test]
fn summary_line() {
    let output = plain(10).format(&one_to_ten()).unwrap();
    assert!(output.ends_with("Summary: 10 items in 3 buckets, range 1 to 10\n"));
}

#[test]
fn fractional_boundaries_use_label_format() {
    let dist = bin(vec![0.0, 1.0], |x| *x, 0.0, 1.0, 3).unwrap();
    let output = plain(10).format(&dist).unwrap();
    assert!(output.contains("[0, 0.33)"));
    assert!(output.contains("[0.33, 0.67)"));
    assert!(output.contains("[0.67, 1]"));
}

#[test]
fn empty_buckets_have_no_bar() {
    let dist = bin(Vec::<f64>::new(), |x| *x, 0.0, 1.0, 2).unwrap();
    let output = plain(10).format(&dist).unwrap();
    assert!(!output.contains('#'));
    assert!(output.contains("0.00%"));
    assert!(output.contains("Summary: 0 items in 2 buckets"));
}

#[test]
fn colored_bars() {
    let formatter = TextFormatter {
        use_colors: true,
        bar_width: 2,
    };
    let output = formatter.format(&one_to_ten()).unwrap();
    assert!(output.contains(&format!("{}##{}", ansi::GREEN, ansi::RESET)));
    assert!(output.starts_with(ansi::BOLD));
}
