use std::path::{Path, PathBuf};

const DIR_METADATA: &str = "metadata";
const FILE_METADATA: &str = "metadata.json";
const FILE_APP_METADATA: &str = "app_metadata.json";
const FILE_REPORT: &str = "report.json";
const FILE_REPORT_PDF: &str = "pebblo_report.pdf";

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

pub fn path_to_app(home: &Path, app_dir: &str) -> PathBuf {
    home.join(app_dir)
}

pub fn path_to_metadata(home: &Path, app_dir: &str) -> PathBuf {
    home.join(app_dir).join(DIR_METADATA).join(FILE_METADATA)
}

pub fn path_to_app_metadata(home: &Path, app_dir: &str) -> PathBuf {
    home.join(app_dir).join(DIR_METADATA).join(FILE_APP_METADATA)
}

pub fn path_to_report(home: &Path, app_dir: &str, load_id: &str) -> PathBuf {
    home.join(app_dir).join(load_id).join(FILE_REPORT)
}

pub fn path_to_report_pdf(home: &Path, app_dir: &str, load_id: &str) -> PathBuf {
    home.join(app_dir).join(load_id).join(FILE_REPORT_PDF)
}

pub fn report_file_name(app_name: &str) -> String {
    format!("{app_name}_{FILE_REPORT_PDF}")
}

pub const STYLESHEET: &str = "pebblo.css";
pub const FRONTEND_JS: &str = "pebblo-frontend.js";
pub const FRONTEND_WASM: &str = "pebblo-frontend_bg.wasm";
