// HMAC-SHA1 signed URL generation end to end

use thumbor_url::*;

fn complex_image(thumbor: &Thumbor) -> UrlBuilder {
    let watermark = Thumbor::default()
        .build_image("b.com/c.jpg")
        .unwrap()
        .resize(20, 20)
        .unwrap();

    thumbor
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
}

#[test]
fn test_complex_safe_url() {
    let thumbor = Thumbor::with_key("/", "test").unwrap();
    let url = complex_image(&thumbor).to_url().unwrap();
    assert_eq!(
        url,
        "/X_5ze5WdyTObULp4Toj6mHX-R1U=/10x10:90x90/40x40/filters:watermark(/unsafe/20x20/b.com/c.jpg,10,10,0):round_corner(5,255,255,255)/a.com/b.png"
    );
}

#[test]
fn test_safe_url_with_host() {
    let thumbor = Thumbor::with_key("http://thumbor.example.com", "test").unwrap();
    let url = thumbor
        .build_image("a.com/b.png")
        .unwrap()
        .resize(40, 40)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(
        url,
        "http://thumbor.example.com/nX4KThLYD1SLUP-PHwY34PuQsjs=/40x40/a.com/b.png"
    );
}

#[test]
fn test_safe_url_with_flips_fit_in_and_filters() {
    let thumbor = Thumbor::with_key("/", "my-security-key").unwrap();
    let url = thumbor
        .build_image("my.server.com/some/path/to/image.jpg")
        .unwrap()
        .resize(300, 200)
        .unwrap()
        .fit_in()
        .unwrap()
        .flip_horizontally()
        .unwrap()
        .flip_vertically()
        .unwrap()
        .smart()
        .unwrap()
        .filter([Filter::quality(80).unwrap()])
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(
        url,
        "/BmOoe286_rk1eIlZZ3EWxOTfS5c=/fit-in/-300x-200/smart/filters:quality(80)/my.server.com/some/path/to/image.jpg"
    );
}

#[test]
fn test_keyed_instance_still_builds_unsafe_on_request() {
    let thumbor = Thumbor::with_key("/", "test").unwrap();
    let image = complex_image(&thumbor);
    assert!(image.to_url_unsafe().starts_with("/unsafe/10x10:90x90/"));
}
