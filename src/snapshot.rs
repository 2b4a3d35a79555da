//! JSON view of a picker for the rendering layer.

use serde_json::{Value, json};

use crate::core::codec;
use crate::core::grid::{self, DayCell};
use crate::core::locale;
use crate::picker::DatePicker;

pub fn picker_to_json(picker: &DatePicker) -> Value {
    let cursor = picker.cursor();
    let cells = picker.grid();
    let weeks: Vec<Value> = grid::weeks(&cells)
        .into_iter()
        .map(|week| Value::Array(week.iter().map(cell_to_json).collect()))
        .collect();

    json!({
        "open": picker.is_open(),
        "text": picker.text(),
        "placeholder": picker.placeholder(),
        "value": picker.value(),
        "selected": picker.selected().map(codec::to_storage),
        "month": {
            "year": cursor.year,
            "month": cursor.month,
            "caption": locale::caption(cursor),
        },
        "weekdays": locale::WEEKDAY_LABELS,
        "weeks": weeks,
        "display_name": picker.display_field_name(),
        "hidden": picker.hidden_field(),
    })
}

fn cell_to_json(cell: &DayCell) -> Value {
    json!({
        "day": cell.date.day(),
        "date": codec::to_storage(cell.date),
        "in_month": cell.is_in_current_month,
        "selected": cell.is_selected,
    })
}

#[cfg(test)]
mod tests {
    use super::picker_to_json;
    use crate::picker::DatePicker;

    #[test]
    fn exports_grid_rows_and_caption() {
        let picker = DatePicker::new()
            .with_name("dateOfBirth")
            .with_value("2024-02-29");
        let json = picker_to_json(&picker);

        assert_eq!(json["text"], "29/02/2024");
        assert_eq!(json["value"], "2024-02-29");
        assert_eq!(json["month"]["caption"], "février 2024");
        assert_eq!(json["month"]["month"], 1);
        assert_eq!(json["weekdays"][0], "Lu");
        assert_eq!(json["hidden"]["name"], "dateOfBirth");
        assert_eq!(json["display_name"], "dateOfBirth-display");

        let weeks = json["weeks"].as_array().expect("weeks array");
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0]["date"], "2024-01-29");
        assert_eq!(weeks[0][0]["in_month"], false);
        assert_eq!(weeks[4][3]["date"], "2024-02-29");
        assert_eq!(weeks[4][3]["selected"], true);
    }

    #[test]
    fn empty_picker_exports_nulls() {
        let json = picker_to_json(&DatePicker::new());
        assert!(json["selected"].is_null());
        assert!(json["hidden"].is_null());
        assert!(json["display_name"].is_null());
        assert_eq!(json["value"], "");
    }
}
