//! Single-page PDF around one JPEG.

use lopdf::Document;
use lopdf::Object;
use lopdf::Stream;
use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;

use crate::ExportError;
use crate::encode::EncodedImage;

const IMAGE_NAME: &str = "Im0";

/// Build a PDF with exactly one page whose media box equals the image's
/// pixel size, with the image drawn edge to edge.
///
/// The JPEG stream is embedded as-is (`DCTDecode`); the document is not
/// recompressed.
pub fn package_pdf(image: EncodedImage) -> Result<Vec<u8>, ExportError> {
    let width = i64::from(image.width);
    let height = i64::from(image.height);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        image.bytes,
    )
    .with_compression(false);
    let image_id = doc.add_object(image_stream);

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(height),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(height),
        ],
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_NAME => image_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;
    use image::Rgb;
    use image::RgbImage;
    use pretty_assertions::assert_eq;

    #[test]
    fn pdf_has_one_page_sized_to_the_image() {
        let bitmap = RgbImage::from_pixel(64, 96, Rgb([255, 255, 255]));
        let pdf = package_pdf(encode_jpeg(&bitmap).unwrap()).unwrap();

        let doc = Document::load_mem(&pdf).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box: Vec<i64> = page
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        assert_eq!(media_box, vec![0, 0, 64, 96]);
    }

    #[test]
    fn image_is_embedded_as_dct_stream() {
        let bitmap = RgbImage::from_pixel(16, 32, Rgb([0, 0, 0]));
        let encoded = encode_jpeg(&bitmap).unwrap();
        let jpeg_len = encoded.bytes.len();
        let pdf = package_pdf(encoded).unwrap();

        let doc = Document::load_mem(&pdf).unwrap();
        let image = doc
            .objects
            .values()
            .filter_map(|o| o.as_stream().ok())
            .find(|s| {
                s.dict.get(b"Subtype").and_then(Object::as_name).ok() == Some(b"Image".as_slice())
            })
            .unwrap();
        assert_eq!(image.dict.get(b"Filter").unwrap().as_name().unwrap(), b"DCTDecode");
        assert_eq!(image.content.len(), jpeg_len);
    }
}
