
use super::*;

#[test]
fn test_format_metric() {
    assert_eq!(format_metric(0.5), "0.500000");
    assert_eq!(format_metric(1.0), "1.000000");
    assert_eq!(format_metric(0.1234567), "0.123457");
    assert_eq!(format_metric(f64::NAN), "    nan");
    assert_eq!(format_metric(f64::INFINITY), "    inf");
    assert_eq!(format_metric(f64::NEG_INFINITY), "   -inf");
}
