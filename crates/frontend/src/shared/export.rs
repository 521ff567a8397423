/// Spreadsheet export: CSV that Excel opens directly, downloaded via a Blob.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be exported as spreadsheet rows
pub trait ExcelExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values of one row, same order as `headers()`
    fn to_csv_row(&self) -> Vec<String>;
}

/// Render rows to CSV text.
///
/// `;` delimiter and a UTF-8 BOM, which is what Excel expects for non-ASCII
/// text when the file is double-clicked.
pub fn render_csv<T: ExcelExportable>(data: &[T]) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .map_err(|e| format!("Failed to write header: {}", e))?;
    for item in data {
        writer
            .write_record(item.to_csv_row())
            .map_err(|e| format!("Failed to write row: {}", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV: {}", e))?;
    let body = String::from_utf8(bytes).map_err(|e| format!("CSV is not UTF-8: {}", e))?;

    let mut content = String::with_capacity(body.len() + 3);
    content.push('\u{FEFF}');
    content.push_str(&body);
    Ok(content)
}

/// Export rows to a CSV file and start the browser download
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let content = render_csv(data)?;
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Click a temporary anchor pointing at the blob URL
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
