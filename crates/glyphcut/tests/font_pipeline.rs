use glyphcut::{
    crop_glyphs, mapping, pack_horizontal, segment, test_support::strip_with_runs,
    CharAssignment, CutError, FontDescriptor, PlacementRect,
};
use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;

#[test]
fn three_blocks_end_to_end() {
    let img = strip_with_runs(30, 10, &[(2, 5), (10, 7), (20, 4)]);
    let boxes = segment(&img, 2);
    assert_eq!(boxes.len(), 3);

    let chars = CharAssignment::from_order("ABC", boxes.len()).unwrap();
    let atlas = pack_horizontal(&crop_glyphs(&img, &boxes, 0), 1).unwrap();
    assert_eq!(atlas.width(), 5 + 7 + 4 + 2);
    assert_eq!(atlas.height(), 10);

    let fnt = FontDescriptor::new(&atlas.placements, &chars, atlas.line_height(), "font.png")
        .unwrap()
        .to_string();
    let expected = "\
info face=\"custom\" size=10 bold=0 italic=0 charset=\"\" unicode=0 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1
common lineHeight=10 base=0 scaleW=0 scaleH=0 pages=1 packed=0
page id=0 file=\"font.png\"
chars count=3
char id=65 x=0 y=0 width=5 height=10 xoffset=0 yoffset=0 xadvance=5 page=0 chnl=0
char id=66 x=6 y=0 width=7 height=10 xoffset=0 yoffset=0 xadvance=7 page=0 chnl=0
char id=67 x=14 y=0 width=4 height=10 xoffset=0 yoffset=0 xadvance=4 page=0 chnl=0
";
    assert_eq!(fnt, expected);
}

#[test]
fn order_count_mismatch_reports_both_counts() {
    let err = CharAssignment::from_order("ABCDE", 4).unwrap_err();
    assert!(matches!(
        err,
        CutError::MappingCountMismatch { chars: 5, glyphs: 4 }
    ));
    let msg = err.to_string();
    assert!(msg.contains('5') && msg.contains('4'), "{msg}");
}

#[test]
fn mapping_file_slots() {
    let text = "char_0=A\nchar_1=\n# no separator here\nchar_2==\r\nchar_3=é\n";
    let chars = CharAssignment::from_mapping(text, 4).unwrap();
    assert_eq!(chars.get(0), Some('A'));
    assert_eq!(chars.get(1), None);
    assert_eq!(chars.get(2), Some('='));
    assert_eq!(chars.codepoints().collect::<Vec<_>>(), vec![65, 32, 61, 233]);
}

#[test]
fn mapping_file_count_mismatch() {
    let err = CharAssignment::from_mapping("a=x\nb=y\n", 3).unwrap_err();
    assert!(matches!(
        err,
        CutError::MappingCountMismatch { chars: 2, glyphs: 3 }
    ));
}

#[test]
fn mapping_value_must_be_single_char() {
    let err = CharAssignment::from_mapping("a=x\nb=xy\n", 2).unwrap_err();
    assert!(matches!(err, CutError::InvalidMapping { line: 2, .. }));
}

#[test]
fn template_is_fillable() {
    let t = mapping::template(3);
    assert_eq!(t, "char_0=\nchar_1=\nchar_2=\n");
    let chars = CharAssignment::from_mapping(&t, 3).unwrap();
    assert_eq!(chars.codepoints().collect::<Vec<_>>(), vec![32, 32, 32]);
}

#[test]
fn atlas_size_and_placements() {
    let glyphs = vec![
        RgbaImage::from_pixel(3, 4, Rgba([255, 0, 0, 255])),
        RgbaImage::from_pixel(2, 7, Rgba([0, 255, 0, 255])),
        RgbaImage::from_pixel(5, 1, Rgba([0, 0, 255, 255])),
    ];
    let atlas = pack_horizontal(&glyphs, 3).unwrap();
    assert_eq!(atlas.width(), 3 + 2 + 5 + 2 * 3);
    assert_eq!(atlas.height(), 7);
    assert_eq!(
        atlas.placements,
        vec![
            PlacementRect::new(0, 0, 3, 4),
            PlacementRect::new(6, 0, 2, 7),
            PlacementRect::new(11, 0, 5, 1),
        ]
    );
    assert_eq!(atlas.image.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    assert_eq!(atlas.image.get_pixel(6, 6), &Rgba([0, 255, 0, 255]));
    assert_eq!(atlas.image.get_pixel(15, 0), &Rgba([0, 0, 255, 255]));
    // gaps and the area below short glyphs stay transparent
    assert_eq!(atlas.image.get_pixel(3, 0)[3], 0);
    assert_eq!(atlas.image.get_pixel(0, 5)[3], 0);
}

#[test]
fn single_glyph_atlas_has_no_spacing() {
    let atlas = pack_horizontal(&[RgbaImage::new(4, 2)], 5).unwrap();
    assert_eq!((atlas.width(), atlas.height()), (4, 2));
}

#[test]
fn empty_atlas_is_an_error() {
    assert!(matches!(pack_horizontal(&[], 1), Err(CutError::EmptyAtlas)));
}

#[test]
fn descriptor_rejects_mismatched_lengths() {
    let chars = CharAssignment::from_order("AB", 2).unwrap();
    let rects = [PlacementRect::new(0, 0, 1, 1)];
    assert!(matches!(
        FontDescriptor::new(&rects, &chars, 1, "font.png"),
        Err(CutError::MappingCountMismatch { chars: 2, glyphs: 1 })
    ));
}

#[test]
fn oversized_atlas_is_an_error() {
    let glyphs = [RgbaImage::new(2, 1), RgbaImage::new(2, 1)];
    assert!(matches!(
        pack_horizontal(&glyphs, u32::MAX),
        Err(CutError::AtlasTooLarge {
            glyphs: 2,
            spacing: u32::MAX
        })
    ));
    assert!(matches!(
        pack_horizontal(&glyphs, u32::MAX - 3),
        Err(CutError::AtlasTooLarge { .. })
    ));
}

#[test]
fn huge_spacing_with_one_glyph_is_fine() {
    let atlas = pack_horizontal(&[RgbaImage::new(2, 1)], u32::MAX).unwrap();
    assert_eq!(atlas.width(), 2);
    assert_eq!(atlas.placements, vec![PlacementRect::new(0, 0, 2, 1)]);
}
