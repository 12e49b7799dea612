//! Embedded image extraction via page XObject resources.
//!
//! Walks each page's `Resources/XObject` dictionary for image streams and
//! re-encodes them as PNG. JPEG (DCTDecode) streams are decoded with the
//! `image` crate; flate-compressed raw samples are reinterpreted from their
//! color space. Unsupported encodings are skipped with a warning rather
//! than failing the page.

use crate::error::{Error, Result};
use crate::model::ImageBlob;
use image::{DynamicImage, GrayImage, RgbImage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Cursor;

/// Count image XObjects on a page without decoding them.
pub fn page_image_count(doc: &Document, page_id: ObjectId) -> u32 {
    image_streams(doc, page_id)
        .map(|streams| streams.len() as u32)
        .unwrap_or(0)
}

/// Extract all embedded images of the document, in page order.
pub fn collect_images(doc: &Document) -> Result<Vec<ImageBlob>> {
    let mut blobs = Vec::new();

    for (page_num, page_id) in doc.get_pages() {
        let streams = match image_streams(doc, page_id) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("page {page_num}: cannot enumerate image XObjects: {e}");
                continue;
            }
        };

        for (index, stream) in streams.into_iter().enumerate() {
            let index = index as u32 + 1;
            match decode_image(doc, &stream) {
                Ok((width, height, data)) => blobs.push(ImageBlob {
                    page: page_num,
                    index,
                    width,
                    height,
                    data,
                }),
                Err(e) => {
                    log::warn!("page {page_num} image {index}: skipping ({e})");
                }
            }
        }
    }

    Ok(blobs)
}

/// Resolve the image streams referenced by a page's XObject dictionary.
fn image_streams(doc: &Document, page_id: ObjectId) -> Result<Vec<Stream>> {
    let page_dict = doc
        .get_dictionary(page_id)
        .map_err(|e| Error::PdfParse(e.to_string()))?;

    let Some(resources) = resolve_dict(doc, page_dict.get(b"Resources").ok()) else {
        return Ok(Vec::new());
    };
    let Some(xobjects) = resolve_dict(doc, resources.get(b"XObject").ok()) else {
        return Ok(Vec::new());
    };

    let mut streams = Vec::new();
    for (_name, obj) in xobjects.iter() {
        let stream = match obj {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(Object::Stream(s)) => s.clone(),
                _ => continue,
            },
            Object::Stream(s) => s.clone(),
            _ => continue,
        };

        let is_image = stream
            .dict
            .get(b"Subtype")
            .ok()
            .and_then(|o| o.as_name().ok())
            .map(|n| n == b"Image")
            .unwrap_or(false);
        if is_image {
            streams.push(stream);
        }
    }

    Ok(streams)
}

/// Follow one level of indirection to a dictionary.
fn resolve_dict<'a>(doc: &'a Document, obj: Option<&'a Object>) -> Option<&'a Dictionary> {
    match obj? {
        Object::Dictionary(d) => Some(d),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Dictionary(d) => Some(d),
            _ => None,
        },
        _ => None,
    }
}

/// Decode one image stream into PNG bytes.
fn decode_image(doc: &Document, stream: &Stream) -> Result<(u32, u32, Vec<u8>)> {
    let width = dict_u32(doc, &stream.dict, b"Width")
        .ok_or_else(|| Error::ImageExtract("image stream without Width".to_string()))?;
    let height = dict_u32(doc, &stream.dict, b"Height")
        .ok_or_else(|| Error::ImageExtract("image stream without Height".to_string()))?;

    let filters = stream_filters(&stream.dict);

    let dynamic = if filters.iter().any(|f| f == "DCTDecode") {
        // JPEG payload: hand the raw stream bytes to the image decoder.
        image::load_from_memory_with_format(&stream.content, image::ImageFormat::Jpeg)
            .map_err(|e| Error::ImageExtract(format!("JPEG decode failed: {e}")))?
    } else {
        let samples = stream
            .decompressed_content()
            .map_err(|e| Error::ImageExtract(format!("decompress failed: {e}")))?;
        raw_samples_to_image(doc, &stream.dict, width, height, samples)?
    };

    let mut png = Vec::new();
    dynamic
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| Error::ImageExtract(format!("PNG encode failed: {e}")))?;

    Ok((width, height, png))
}

/// Interpret decompressed raw samples using the declared color space.
fn raw_samples_to_image(
    doc: &Document,
    dict: &Dictionary,
    width: u32,
    height: u32,
    samples: Vec<u8>,
) -> Result<DynamicImage> {
    let bits = dict_u32(doc, dict, b"BitsPerComponent").unwrap_or(8);
    if bits != 8 {
        return Err(Error::ImageExtract(format!(
            "unsupported bits per component: {bits}"
        )));
    }

    let color_space = dict
        .get(b"ColorSpace")
        .ok()
        .and_then(|o| resolve_name(doc, o))
        .unwrap_or_else(|| "DeviceRGB".to_string());

    match color_space.as_str() {
        "DeviceRGB" => {
            let expected = (width * height * 3) as usize;
            if samples.len() < expected {
                return Err(Error::ImageExtract("truncated RGB samples".to_string()));
            }
            let buf = RgbImage::from_raw(width, height, samples[..expected].to_vec())
                .ok_or_else(|| Error::ImageExtract("invalid RGB buffer".to_string()))?;
            Ok(DynamicImage::ImageRgb8(buf))
        }
        "DeviceGray" => {
            let expected = (width * height) as usize;
            if samples.len() < expected {
                return Err(Error::ImageExtract("truncated gray samples".to_string()));
            }
            let buf = GrayImage::from_raw(width, height, samples[..expected].to_vec())
                .ok_or_else(|| Error::ImageExtract("invalid gray buffer".to_string()))?;
            Ok(DynamicImage::ImageLuma8(buf))
        }
        other => Err(Error::ImageExtract(format!(
            "unsupported color space: {other}"
        ))),
    }
}

/// Collect the stream's filter chain as names.
fn stream_filters(dict: &Dictionary) -> Vec<String> {
    match dict.get(b"Filter") {
        Ok(Object::Name(n)) => vec![String::from_utf8_lossy(n).to_string()],
        Ok(Object::Array(arr)) => arr
            .iter()
            .filter_map(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string())
            .collect(),
        _ => Vec::new(),
    }
}

fn dict_u32(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<u32> {
    match dict.get(key).ok()? {
        Object::Integer(i) => u32::try_from(*i).ok(),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Integer(i) => u32::try_from(*i).ok(),
            _ => None,
        },
        _ => None,
    }
}

fn resolve_name(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::Name(n) => Some(String::from_utf8_lossy(n).to_string()),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Name(n) => Some(String::from_utf8_lossy(n).to_string()),
            _ => None,
        },
        _ => None,
    }
}
