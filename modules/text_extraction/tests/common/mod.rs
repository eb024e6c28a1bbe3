//! Common test utilities: configuration generators and output helpers
#![allow(dead_code)]

use text_extraction::{ExtractionRequestConfig, RotateAngle, Timeout};

/// Print a short banner for a test
pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("text_extraction=debug")
        .with_test_writer()
        .try_init();
}

pub fn timeout(seconds: i64) -> Timeout {
    Timeout::try_from(seconds).unwrap()
}

pub const ANGLES: [RotateAngle; 4] = [
    RotateAngle::Deg0,
    RotateAngle::Deg90,
    RotateAngle::Deg180,
    RotateAngle::Deg270,
];

/// Every combination of flags and angles, with no timeout, 1s and 30s
pub fn all_configs() -> Vec<ExtractionRequestConfig> {
    let timeouts = [None, Some(timeout(1)), Some(timeout(30))];
    let mut configs = Vec::new();

    for bits in 0u8..64 {
        let flag = |n: u8| bits & (1 << n) != 0;
        for angle in ANGLES {
            for t in timeouts {
                configs.push(ExtractionRequestConfig {
                    as_plain_text: flag(0),
                    with_ocr: flag(1),
                    with_bounding_boxes: flag(2),
                    inline_ocr: flag(3),
                    ocr_with_text: flag(4),
                    detect_tables: flag(5),
                    rotate_angle: angle,
                    timeout: t,
                });
            }
        }
    }

    configs
}

/// Wire pairs as owned strings, for readable assertions
pub fn pairs(items: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    items
        .iter()
        .map(|(name, value)| (*name, value.to_string()))
        .collect()
}
