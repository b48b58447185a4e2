// Shared fixtures: small PDFs written with lopdf's builder
#![allow(dead_code)]
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::path::{Path, PathBuf};

// ToUnicode map for CIDs 1..=5 -> "React"
const REACT_TO_UNICODE: &str = "/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
5 beginbfchar
<0001> <0052>
<0002> <0065>
<0003> <0061>
<0004> <0063>
<0005> <0074>
endbfchar
endcmap
CMapName currentdict /CMap defineresource pop
end
end
";

fn text_operations(font: &str, text: Object) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 700.into()]),
        Operation::new("Tj", vec![text]),
        Operation::new("ET", vec![]),
    ]
}

fn courier_resources(doc: &mut Document) -> ObjectId {
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    })
}

/// A document with one page per operation list, all sharing `resources_id`.
fn build_document(
    mut doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    pages: Vec<Vec<Operation>>,
) -> Document {
    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    doc.save(&path).expect("save pdf");
    path
}

/// One page per entry. `None` produces a page with drawing operators but no text.
pub fn write_pdf(dir: &Path, name: &str, pages: &[Option<&str>]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = courier_resources(&mut doc);

    let operations = pages
        .iter()
        .map(|page| match page {
            Some(text) => text_operations("F1", Object::string_literal(*text)),
            None => vec![
                Operation::new("re", vec![0.into(), 0.into(), 10.into(), 10.into()]),
                Operation::new("f", vec![]),
            ],
        })
        .collect();

    save(build_document(doc, pages_id, resources_id, operations), dir, name)
}

/// One page whose only text is "React", shown through a Type0 font with
/// Identity-H encoding and a ToUnicode map, as word processors emit it.
pub fn write_identity_h_pdf(dir: &Path, name: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let to_unicode_id = doc.add_object(Stream::new(
        dictionary! {},
        REACT_TO_UNICODE.as_bytes().to_vec(),
    ));
    let descendant_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => "Arial",
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
    });
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "Arial",
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![descendant_id.into()],
        "ToUnicode" => to_unicode_id,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F2" => font_id,
        },
    });

    let glyphs = Object::String(
        vec![0, 1, 0, 2, 0, 3, 0, 4, 0, 5],
        StringFormat::Hexadecimal,
    );
    let operations = vec![text_operations("F2", glyphs)];

    save(build_document(doc, pages_id, resources_id, operations), dir, name)
}

/// Two pages; the second selects a font with no operand, which the text
/// extractor rejects.
pub fn write_bad_second_page_pdf(dir: &Path, name: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = courier_resources(&mut doc);

    let operations = vec![
        text_operations("F1", Object::string_literal("React Vue")),
        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![]),
            Operation::new("Tj", vec![Object::string_literal("Angular")]),
            Operation::new("ET", vec![]),
        ],
    ];

    save(build_document(doc, pages_id, resources_id, operations), dir, name)
}

/// A document whose trailer declares standard-handler encryption that the
/// empty password cannot open.
pub fn write_locked_pdf(dir: &Path, name: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = courier_resources(&mut doc);
    let operations = vec![text_operations("F1", Object::string_literal("Django"))];
    let mut doc = build_document(doc, pages_id, resources_id, operations);

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "P" => -44,
        "O" => Object::String(vec![0x4f; 32], StringFormat::Literal),
        "U" => Object::String(vec![0x55; 32], StringFormat::Literal),
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    let file_id = Object::String(vec![0x11; 16], StringFormat::Hexadecimal);
    doc.trailer.set("ID", vec![file_id.clone(), file_id]);

    save(doc, dir, name)
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("read report");
    serde_json::from_str(&raw).expect("parse report")
}
