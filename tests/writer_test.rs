//! End-to-end tests for the terminal writer: glyph selection, colorizers,
//! frame layout and configuration.

use term_raster::core::{fill_area, set_pixel, Bitmap};
use term_raster::term::{
    encode_frame, glyph_rows, AnsiColorizer, Colorizer, ColorizerKind, Style, StyleConfig,
    StyleError, TrueColorizer, Writer,
};
use term_raster::types::{DEFAULT_GRADIENT, DEFAULT_SYMBOL_WH_FRACTION};

fn plain_writer() -> Writer<Vec<u8>> {
    Writer::new(Vec::new(), Style::default().with_symbol_wh_fraction(1.0))
        .unwrap()
        .with_auto_resize(false)
}

#[test]
fn white_4x4_frame_is_at_signs_then_reset() {
    let mut w = plain_writer();
    w.set_frame_size(4, 4);
    fill_area(w.bitmap_mut(), 0, 0, 4, 4, 0xffff_ffff);
    w.write_frame().unwrap();
    assert_eq!(
        String::from_utf8(w.output().clone()).unwrap(),
        "@@@@\n@@@@\n@@@@\n@@@@\n\x1b[0m"
    );
}

#[test]
fn glyph_index_never_decreases_with_brightness() {
    let style = Style::default();
    let gradient: Vec<char> = DEFAULT_GRADIENT.chars().collect();
    let mut last = 0;
    for b in 0..=255u8 {
        let c = style.char_from_brightness(b);
        let idx = gradient.iter().position(|&g| g == c).unwrap();
        assert!(idx >= last, "brightness {b} went back to {c:?}");
        last = idx;
    }
    assert_eq!(last, gradient.len() - 1);
}

#[test]
fn palette_maps_red_and_skips_gray() {
    assert_eq!(AnsiColorizer.begin_seq(0xffff_0000), "\x1b[31m");
    assert_eq!(AnsiColorizer.begin_seq(0xff80_8080), "");
    assert_eq!(AnsiColorizer::nearest(0xff80_8080), None);
}

#[test]
fn zero_deterioration_is_a_typed_error() {
    assert_eq!(TrueColorizer::new(0), Err(StyleError::ZeroDeterioration));
    let cfg = StyleConfig {
        colorizer: ColorizerKind::TrueColor,
        deterioration: 0,
        ..StyleConfig::default()
    };
    assert!(Writer::new(Vec::new(), Style::default()).is_ok());
    assert_eq!(cfg.writer(Vec::new()).err(), Some(StyleError::ZeroDeterioration));
}

#[test]
fn shrinking_to_zero_keeps_the_old_surface() {
    let mut w = plain_writer();
    w.set_frame_size(5, 3);
    set_pixel(w.bitmap_mut(), 4, 2, 0xffff_ffff);
    w.set_frame_size(0, 3);
    w.set_frame_size(5, 0);
    assert_eq!(w.write_frame().unwrap(), "     \n     \n    @\n".len());
}

#[test]
fn frames_counter_skips_empty_frames() {
    let mut w = plain_writer();
    w.write_frame().unwrap();
    assert_eq!(w.frames_written(), 0);
    w.set_frame_size(1, 1);
    w.write_frame().unwrap();
    w.write_frame().unwrap();
    assert_eq!(w.frames_written(), 2);
}

#[test]
fn default_ratio_compresses_columns() {
    let b = Bitmap::filled(11, 2, 0xffff_ffff);
    let rows = glyph_rows(&b, &Style::default());
    let cols = (11.0 / DEFAULT_SYMBOL_WH_FRACTION).ceil() as usize;
    assert_eq!(cols, 24);
    assert_eq!(rows, vec!["@".repeat(cols), "@".repeat(cols)]);
}

#[test]
fn fractional_column_count_rounds_up() {
    let b = Bitmap::filled(36, 1, 0xffff_ffff);
    let rows = glyph_rows(&b, &Style::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].chars().count(), 79);
    assert!(rows[0].chars().all(|c| c == '@'));
}

#[test]
fn true_color_sequences_change_only_at_color_edges() {
    let mut b = Bitmap::new(6, 1);
    fill_area(&mut b, 0, 0, 3, 1, 0xff10_0000);
    fill_area(&mut b, 3, 0, 6, 1, 0xff00_0010);
    let style = Style::default()
        .with_symbol_wh_fraction(1.0)
        .with_colorizer(TrueColorizer::default());
    let frame = encode_frame(&b, &style);
    assert_eq!(frame.matches("\x1b[38;2;").count(), 2);
    assert!(frame.starts_with("\x1b[38;2;16;0;0m"));
}

#[test]
fn config_file_drives_the_writer() {
    let cfg: StyleConfig = serde_json::from_str(
        r#"{ "colorizer": "ansi", "gradient": " #", "symbol_wh_fraction": 1.0, "auto_resize": false }"#,
    )
    .unwrap();
    let mut w = cfg.writer(Vec::new()).unwrap();
    w.set_frame_size(2, 1);
    fill_area(w.bitmap_mut(), 0, 0, 2, 1, 0xffff_0000);
    w.write_frame().unwrap();
    let out = String::from_utf8(w.output().clone()).unwrap();
    assert!(out.starts_with("\x1b[31m"));
    assert!(out.contains('\n'));
    assert!(!w.auto_resize());
}
