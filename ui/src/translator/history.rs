use api::HistoryRecord;

use crate::core::format;

/// One table row of the history panel, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: i64,
    pub text: String,
    pub audio_path: String,
    pub date: String,
}

impl From<&HistoryRecord> for HistoryRow {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            id: record.id,
            text: record.translated_text.clone(),
            audio_path: record.audio_path.clone(),
            date: format::format_history_date(&record.translated_at),
        }
    }
}

/// Rows in the order the backend returned them.
pub fn rows(records: &[HistoryRecord]) -> Vec<HistoryRow> {
    records.iter().map(HistoryRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::DATE_FALLBACK;

    #[test]
    fn rows_keep_backend_order_and_format_dates() {
        let records = vec![
            HistoryRecord {
                id: 7,
                translated_text: "hola".into(),
                audio_path: "/audios/traduccion-1.mp3".into(),
                translated_at: "2025-03-09T18:45:00Z".into(),
            },
            HistoryRecord {
                id: 3,
                translated_text: "gracias".into(),
                audio_path: String::new(),
                translated_at: "sin fecha".into(),
            },
        ];

        let rows = rows(&records);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].date, "9 mar 2025, 18:45");
        assert_eq!(rows[1].id, 3);
        assert_eq!(rows[1].date, DATE_FALLBACK);
    }

    #[test]
    fn null_columns_render_as_fallback_date() {
        let record: HistoryRecord = serde_json::from_value(serde_json::json!({
            "TraduccionID": 4,
            "PalabraTraducida": "adiós",
            "RutaAudio": null,
            "FechaTraduccion": null
        }))
        .unwrap();

        let rows = rows(&[record]);
        assert_eq!(rows[0].text, "adiós");
        assert_eq!(rows[0].date, DATE_FALLBACK);
    }
}
