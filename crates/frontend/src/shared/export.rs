/// Экспорт списков в CSV (для Excel) и JSON
use csv::WriterBuilder;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для типов, которые могут быть экспортированы в Excel
pub trait ExcelExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в массив значений для CSV
    fn to_csv_row(&self) -> Vec<String>;
}

/// CSV с разделителем `;` и UTF-8 BOM, чтобы Excel правильно открыл файл
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }

    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(Vec::new());
    writer
        .write_record(T::headers())
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;
    for item in data {
        writer
            .write_record(item.to_csv_row())
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to finish CSV: {}", e))?;
    let body = String::from_utf8(bytes).map_err(|e| format!("CSV is not UTF-8: {}", e))?;

    Ok(format!("\u{FEFF}{}", body))
}

pub fn build_json<T: Serialize>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }
    serde_json::to_string_pretty(data).map_err(|e| format!("Failed to serialize JSON: {}", e))
}

/// Экспортирует список в CSV файл и инициирует скачивание
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let content = build_csv(data)?;
    download(&content, "text/csv;charset=utf-8;", filename)?;
    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

pub fn export_to_json<T: Serialize>(data: &[T], filename: &str) -> Result<(), String> {
    let content = build_json(data)?;
    download(&content, "application/json;charset=utf-8;", filename)?;
    log::info!("Exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// Инициирует скачивание текста через браузер
fn download(content: &str, mime: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(&blob)
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

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}
