/// Separator between the upload timestamp and the original filename.
pub const TIMESTAMP_DELIMITER: char = '-';

/// Human-readable name of a stored upload.
///
/// Strips everything up to and including the first `-`. Names without a
/// timestamp prefix are returned unchanged.
pub fn display_name(stored: &str) -> &str {
    stored
        .split_once(TIMESTAMP_DELIMITER)
        .map(|(_, rest)| rest)
        .unwrap_or(stored)
}

/// Coarse file category, used only to pick an icon and a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Document,
    Spreadsheet,
    File,
}

const EXTENSIONS: &[(&str, FileKind)] = &[
    ("jpg", FileKind::Image),
    ("jpeg", FileKind::Image),
    ("png", FileKind::Image),
    ("gif", FileKind::Image),
    ("pdf", FileKind::Pdf),
    ("doc", FileKind::Document),
    ("docx", FileKind::Document),
    ("xls", FileKind::Spreadsheet),
    ("xlsx", FileKind::Spreadsheet),
];

impl FileKind {
    /// Classify by extension, ignoring case.
    pub fn classify(filename: &str) -> Self {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return FileKind::File;
        };
        EXTENSIONS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|(_, kind)| *kind)
            .unwrap_or(FileKind::File)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Image => "Image",
            FileKind::Pdf => "PDF",
            FileKind::Document => "Document",
            FileKind::Spreadsheet => "Spreadsheet",
            FileKind::File => "File",
        }
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon_name(&self) -> &'static str {
        match self {
            FileKind::Image => "file-image",
            FileKind::Pdf => "file-pdf",
            FileKind::Document => "file-word",
            FileKind::Spreadsheet => "file-excel",
            FileKind::File => "file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_timestamp() {
        assert_eq!(display_name("20240315140226-invoice.pdf"), "invoice.pdf");
        assert_eq!(display_name("1690000-my-report-v2.docx"), "my-report-v2.docx");
        assert_eq!(display_name("plain.txt"), "plain.txt");
    }

    #[test]
    fn test_classify_images_any_case() {
        assert_eq!(FileKind::classify("1-photo.PNG"), FileKind::Image);
        assert_eq!(FileKind::classify("1-photo.png"), FileKind::Image);
        assert_eq!(FileKind::classify("1-photo.JpEg"), FileKind::Image);
        assert_eq!(FileKind::classify("1-anim.gif"), FileKind::Image);
    }

    #[test]
    fn test_classify_documents() {
        assert_eq!(FileKind::classify("1-a.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::classify("1-a.PDF"), FileKind::Pdf);
        assert_eq!(FileKind::classify("1-letter.docx"), FileKind::Document);
        assert_eq!(FileKind::classify("1-letter.doc"), FileKind::Document);
        assert_eq!(FileKind::classify("1-sheet.xlsx"), FileKind::Spreadsheet);
        assert_eq!(FileKind::classify("1-sheet.XLS"), FileKind::Spreadsheet);
    }

    #[test]
    fn test_classify_unknown_is_generic_file() {
        assert_eq!(FileKind::classify("1-notes.txt"), FileKind::File);
        assert_eq!(FileKind::classify("README"), FileKind::File);
        assert_eq!(FileKind::classify("1-archive.pdf.zip"), FileKind::File);
        assert_eq!(FileKind::File.label(), "File");
    }
}
