// Legacy AES signed URL generation end to end

use thumbor_url::*;

#[test]
fn test_complex_legacy_url() {
    let thumbor = Thumbor::with_key("/", "test").unwrap();
    let watermark = Thumbor::default()
        .build_image("b.com/c.jpg")
        .unwrap()
        .resize(20, 20)
        .unwrap();

    let url = thumbor
        .build_image("a.com/b.png")
        .unwrap()
        .crop(10, 10, 90, 90)
        .unwrap()
        .resize(40, 40)
        .unwrap()
        .filter([
            Filter::watermark_image(&watermark, 10, 10, 0).unwrap(),
            Filter::round_corner(5).unwrap(),
        ])
        .unwrap()
        .legacy()
        .to_url()
        .unwrap();

    assert_eq!(
        url,
        "/xrUrWUD_ZhogPh-rvPF5VhgWENCgh-mzknoAEZ7dcX_xa7sjqP1ff9hQQq_ORAKmuCr5pyyU3srXG7BUdWUzBqp3AIucz8KiGsmHw1eFe4SBWhp1wSQNG49jSbbuHaFF_4jy5oV4Nh821F4yqNZfe6CIvjbrr1Vw2aMPL4bE7VCHBYE9ukKjVjLRiW3nLfih/a.com/b.png"
    );
}

#[test]
fn test_simple_legacy_url() {
    let url = Thumbor::with_key("/", "test")
        .unwrap()
        .build_image("a.com/b.png")
        .unwrap()
        .resize(40, 40)
        .unwrap()
        .legacy()
        .to_url()
        .unwrap();
    assert_eq!(
        url,
        "/40aTUjQz8_ZWY_XLRYKTB2hoIODCPqPQuKKdcUDbG1qI6MX6RgBCXOiJSXwc1hF2/a.com/b.png"
    );
}

#[test]
fn test_legacy_from_config_applies_to_every_builder() {
    let config = ThumborConfig {
        host: None,
        key: Some("test".to_string()),
        legacy: true,
    };
    let thumbor = Thumbor::from_config(&config).unwrap();
    let url = thumbor
        .build_image("a.com/b.png")
        .unwrap()
        .resize(40, 40)
        .unwrap()
        .to_url()
        .unwrap();
    assert!(url.starts_with("/40aTUjQz8_ZWY_XLRYKTB2hoIODCPqPQuKKdcUDbG1qI6MX6RgBCXOiJSXwc1hF2/"));
}

#[test]
fn test_legacy_meta_uses_hmac() {
    let image = Thumbor::with_key("/", "test")
        .unwrap()
        .build_image("a.com/b.png")
        .unwrap()
        .resize(40, 40)
        .unwrap()
        .legacy();
    assert_eq!(
        image.to_meta().unwrap(),
        "/iz5ATWScGMuMf6MtNnMPdrrNsXQ=/meta/40x40/a.com/b.png"
    );
}
