use {crate::Label, chrono::NaiveDateTime};

/// `strftime` pattern of the capture stamp embedded in sample names.
pub const STAMP_FORMAT: &str = "%Y-%m-%d-%H_%M_%S";

/// `<label>_<YYYY-MM-DD-HH_MM_SS>.jpg`
///
/// Second resolution: two captures of the same label within one second get
/// the same name, and the later one replaces the earlier file.
pub fn sample_file_name(label: Label, stamp: NaiveDateTime) -> String {
    format!("{}_{}.jpg", label, stamp.format(STAMP_FORMAT))
}
