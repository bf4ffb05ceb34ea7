mod tests {
    use myrtio_pwm_light::color::{
        HUE_STEPS, Hsv, Rgb, Rgbw, hsv2rgb, kelvin_to_rgb, rgb_to_rgbw, rgb2hsv,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const WARM_WHITE_LED: Rgb = Rgb {
        r: 255,
        g: 219,
        b: 186,
    };

    fn distance(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn test_rgb2hsv_primaries() {
        assert_eq!(rgb2hsv(RED), Hsv::new(0, 255, 255));
        assert_eq!(rgb2hsv(Rgb::new(0, 255, 0)), Hsv::new(1200, 255, 255));
        assert_eq!(rgb2hsv(Rgb::new(0, 0, 255)), Hsv::new(2400, 255, 255));
        assert_eq!(rgb2hsv(Rgb::new(255, 255, 0)), Hsv::new(600, 255, 255));
        assert_eq!(rgb2hsv(WARM_WHITE_LED), Hsv::new(287, 69, 255));
        assert_eq!(rgb2hsv(Rgb::new(200, 100, 50)), Hsv::new(200, 191, 200));
    }

    #[test]
    fn test_rgb2hsv_degenerate() {
        assert_eq!(rgb2hsv(BLACK), Hsv::new(0, 0, 0));
        assert_eq!(rgb2hsv(Rgb::new(128, 128, 128)), Hsv::new(0, 0, 128));
    }

    #[test]
    fn test_hsv2rgb() {
        assert_eq!(hsv2rgb(Hsv::new(0, 255, 255)), RED);
        assert_eq!(hsv2rgb(Hsv::from_degrees(50, 255, 255)), Rgb::new(255, 213, 0));
        assert_eq!(hsv2rgb(Hsv::from_degrees(180, 255, 255)), Rgb::new(0, 255, 255));
        assert_eq!(hsv2rgb(Hsv::new(0, 0, 255)), WHITE);
        assert_eq!(hsv2rgb(Hsv::new(287, 69, 255)), WARM_WHITE_LED);
        assert_eq!(hsv2rgb(Hsv::new(450, 255, 255)), Rgb::new(255, 191, 0));
        // hue wraps around the wheel
        assert_eq!(hsv2rgb(Hsv::new(HUE_STEPS, 255, 255)), RED);
    }

    #[test]
    fn test_degree_helpers() {
        assert_eq!(Hsv::from_degrees(50, 1, 2), Hsv::new(500, 1, 2));
        assert_eq!(Hsv::from_degrees(400, 1, 2).hue, 400);
        assert_eq!(Hsv::new(287, 0, 0).degrees(), 29);
        assert_eq!(Hsv::new(3596, 0, 0).degrees(), 0);
    }

    #[test]
    fn test_hsv_round_trip_keeps_sat_and_val() {
        for hue in (0..HUE_STEPS).step_by(7) {
            for sat in (1..=255).step_by(2) {
                for val in (100..=255).step_by(3) {
                    let hsv = Hsv::new(hue, sat, val);
                    let back = rgb2hsv(hsv2rgb(hsv));
                    assert!(back.sat.abs_diff(sat) <= 1, "{hsv:?} -> {back:?}");
                    assert!(back.val.abs_diff(val) <= 1, "{hsv:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_hsv_round_trip_keeps_hue_of_strong_colors() {
        for hue in (0..HUE_STEPS).step_by(3) {
            for sat in (128..=255).step_by(9) {
                for val in (128..=255).step_by(9) {
                    let hsv = Hsv::new(hue, sat, val);
                    let back = rgb2hsv(hsv2rgb(hsv));
                    let diff = back.hue.abs_diff(hue);
                    let diff = diff.min(HUE_STEPS - diff);
                    assert!(diff <= 10, "{hsv:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_rgb_round_trip() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(3) {
                    let rgb = Rgb::new(r, g, b);
                    let back = hsv2rgb(rgb2hsv(rgb));
                    assert!(distance(rgb, back) <= 1, "{rgb:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_rgb_round_trip_near_primary() {
        let rgb = Rgb::new(0, 2, 211);
        assert_eq!(rgb2hsv(rgb), Hsv::new(2394, 255, 211));
        assert_eq!(hsv2rgb(rgb2hsv(rgb)), rgb);
    }

    #[test]
    fn test_kelvin_to_rgb() {
        assert_eq!(kelvin_to_rgb(2700, 255), Rgb::new(255, 167, 87));
        assert_eq!(kelvin_to_rgb(4500, 255), Rgb::new(255, 218, 187));
        assert_eq!(kelvin_to_rgb(6500, 255), Rgb::new(255, 254, 250));
        assert_eq!(kelvin_to_rgb(2700, 128), Rgb::new(128, 84, 44));
        assert_eq!(kelvin_to_rgb(4500, 0), BLACK);
    }

    #[test]
    fn test_kelvin_to_rgb_clamps_input() {
        assert_eq!(kelvin_to_rgb(0, 255), kelvin_to_rgb(500, 255));
        assert_eq!(kelvin_to_rgb(u16::MAX, 255), kelvin_to_rgb(40_000, 255));
    }

    #[test]
    fn test_rgb_to_rgbw_full_substitution() {
        assert_eq!(
            rgb_to_rgbw(WARM_WHITE_LED, WARM_WHITE_LED),
            Rgbw {
                r: 0,
                g: 0,
                b: 0,
                w: 255
            }
        );
    }

    #[test]
    fn test_rgb_to_rgbw_partial_white() {
        assert_eq!(
            rgb_to_rgbw(WHITE, WARM_WHITE_LED),
            Rgbw {
                r: 0,
                g: 36,
                b: 69,
                w: 255
            }
        );
        assert_eq!(
            rgb_to_rgbw(Rgb::new(100, 100, 100), WARM_WHITE_LED),
            Rgbw {
                r: 0,
                g: 14,
                b: 27,
                w: 100
            }
        );
    }

    #[test]
    fn test_rgb_to_rgbw_saturated_color_has_no_white() {
        assert_eq!(
            rgb_to_rgbw(RED, WARM_WHITE_LED),
            Rgbw {
                r: 255,
                g: 0,
                b: 0,
                w: 0
            }
        );
        assert_eq!(rgb_to_rgbw(BLACK, WARM_WHITE_LED), Rgbw::default());
    }

    #[test]
    fn test_rgb_to_rgbw_pure_white_equivalent() {
        assert_eq!(
            rgb_to_rgbw(WARM_WHITE_LED, WHITE),
            Rgbw {
                r: 95,
                g: 45,
                b: 0,
                w: 255
            }
        );
    }

    #[test]
    fn test_rgb_to_rgbw_zero_equivalent() {
        assert_eq!(
            rgb_to_rgbw(WARM_WHITE_LED, BLACK),
            Rgbw {
                r: 255,
                g: 219,
                b: 186,
                w: 0
            }
        );
    }
}
