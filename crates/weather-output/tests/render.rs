//! Snapshot tests for the rendered CSV.

use chrono::NaiveDate;
use weather_model::{CleanRecord, LabelMapping, ProcessedRow, ProcessedTable};
use weather_output::{render_csv, write_processed};

fn record(day: u32, values: [f64; 4], weather: &str) -> CleanRecord {
    CleanRecord {
        date: NaiveDate::from_ymd_opt(2012, 1, day).unwrap(),
        precipitation: values[0],
        temp_max: values[1],
        temp_min: values[2],
        wind: values[3],
        weather: weather.to_string(),
    }
}

fn sample_table(standardized: bool) -> ProcessedTable {
    let records = vec![
        record(1, [0.0, 12.8, 5.0, 4.7], "drizzle"),
        record(2, [10.9, 10.6, 2.8, 4.5], "rain"),
        record(3, [0.8, 11.7, 7.2, 2.3], "rain"),
    ];
    let label_mapping = LabelMapping::from_labels(records.iter().map(|r| r.weather.as_str()));
    let scaled = [[-0.5, 1.0, 0.0, 1.25], [1.5, -1.0, -1.0, 0.75], [-1.0, 0.0, 1.0, -2.0]];
    let rows = records
        .into_iter()
        .zip(scaled)
        .map(|(record, scaled)| ProcessedRow {
            weather_code: label_mapping.code(&record.weather).unwrap(),
            record,
            scaled: standardized.then_some(scaled),
        })
        .collect();
    ProcessedTable {
        rows,
        label_mapping,
        standardized,
    }
}

#[test]
fn renders_cleaned_table() {
    let text = String::from_utf8(render_csv(&sample_table(false)).unwrap()).unwrap();

    insta::assert_snapshot!(text, @r"
    date,precipitation,temp_max,temp_min,wind,weather,weather_code
    2012-01-01,0.0,12.8,5.0,4.7,drizzle,0
    2012-01-02,10.9,10.6,2.8,4.5,rain,1
    2012-01-03,0.8,11.7,7.2,2.3,rain,1
    ");
}

#[test]
fn renders_standardized_columns_last() {
    let text = String::from_utf8(render_csv(&sample_table(true)).unwrap()).unwrap();

    insta::assert_snapshot!(text, @r"
    date,precipitation,temp_max,temp_min,wind,weather,weather_code,precipitation_scaled,temp_max_scaled,temp_min_scaled,wind_scaled
    2012-01-01,0.0,12.8,5.0,4.7,drizzle,0,-0.5,1.0,0.0,1.25
    2012-01-02,10.9,10.6,2.8,4.5,rain,1,1.5,-1.0,-1.0,0.75
    2012-01-03,0.8,11.7,7.2,2.3,rain,1,-1.0,0.0,1.0,-2.0
    ");
}

#[test]
fn repeated_writes_are_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let table = sample_table(true);

    let a = write_processed(&table, first.path()).unwrap();
    let b = write_processed(&table, second.path()).unwrap();

    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}
