use std::io::Read;

use anyhow::{Context, Result};
use serde_json::Value;

use job_normalizer_lib::shared::utils::logger::init_logger;
use job_normalizer_lib::{
    log_info, log_warn, BatchItem, JobNormalizationService, NormalizationConfig, RawJobFields,
};

/// One element of the input document
#[derive(Debug)]
enum InputSlot {
    Job(RawJobFields),
    /// Not a job mapping; echoed back as received
    Unreadable(Value),
}

/// Reads raw job records as JSON (one object or an array) from the file given
/// as the first argument, or stdin, and prints the normalized records.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = NormalizationConfig::from_env().context("invalid normalizer configuration")?;
    let service = JobNormalizationService::from_config(&config)
        .context("failed to build pattern registry")?;

    let input = read_input(std::env::args().nth(1))?;
    let (slots, single) = parse_records(&input)?;

    let raws = job_records(&slots);
    log_info!("Normalizing {} of {} records", raws.len(), slots.len());

    let items = service.batch_normalize(raws).await;
    let mappings = merge_results(slots, items);

    let output = match (single, mappings.as_slice()) {
        (true, [only]) => only.clone(),
        _ => Value::Array(mappings),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_input(path: Option<String>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Accepts a single record or an array of records. Array elements that are
/// not job mappings are kept in place rather than failing the whole input.
fn parse_records(input: &str) -> Result<(Vec<InputSlot>, bool)> {
    let value: Value = serde_json::from_str(input).context("input is not valid JSON")?;

    match value {
        Value::Array(items) => {
            let slots = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match RawJobFields::from_mapping(item.clone()) {
                    Ok(raw) => InputSlot::Job(raw),
                    Err(error) => {
                        log_warn!("Record #{} is not a job mapping, echoing it: {}", index, error);
                        InputSlot::Unreadable(item)
                    }
                })
                .collect();
            Ok((slots, false))
        }
        Value::Object(_) => Ok((
            vec![InputSlot::Job(
                RawJobFields::from_mapping(value).context("record is not a job mapping")?,
            )],
            true,
        )),
        _ => anyhow::bail!("expected a JSON object or an array of objects"),
    }
}

fn job_records(slots: &[InputSlot]) -> Vec<RawJobFields> {
    slots
        .iter()
        .filter_map(|slot| match slot {
            InputSlot::Job(raw) => Some(raw.clone()),
            InputSlot::Unreadable(_) => None,
        })
        .collect()
}

/// Put batch results back at the index of the slot they came from
fn merge_results(slots: Vec<InputSlot>, items: Vec<BatchItem>) -> Vec<Value> {
    let mut items = items.into_iter();
    slots
        .into_iter()
        .map(|slot| match slot {
            InputSlot::Job(raw) => match items.next() {
                Some(item) => Value::Object(item.to_mapping()),
                None => Value::Object(raw.to_mapping()),
            },
            InputSlot::Unreadable(value) => value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_object_is_one_slot() {
        let (slots, single) = parse_records(r#"{"title": "Engineer"}"#).unwrap();
        assert!(single);
        assert!(matches!(slots.as_slice(), [InputSlot::Job(raw)] if raw.title() == "Engineer"));
    }

    #[test]
    fn epoch_posted_date_is_accepted() {
        let (slots, _) =
            parse_records(r#"{"title": "Engineer", "posted_date": 1705312800}"#).unwrap();
        assert!(matches!(slots.as_slice(), [InputSlot::Job(_)]));
    }

    #[test]
    fn mixed_array_keeps_every_slot() {
        let input = r#"[{"title": "Rust Dev"}, 42, "junk", {"title": 7, "posted_date": 1705312800}]"#;
        let (slots, single) = parse_records(input).unwrap();

        assert!(!single);
        assert_eq!(slots.len(), 4);
        assert!(matches!(slots[0], InputSlot::Job(_)));
        assert!(matches!(&slots[1], InputSlot::Unreadable(value) if *value == 42));
        assert!(matches!(&slots[2], InputSlot::Unreadable(value) if *value == "junk"));
        assert!(matches!(&slots[3], InputSlot::Job(raw) if raw.title() == "7"));
    }

    #[tokio::test]
    async fn mixed_array_normalizes_siblings_of_bad_elements() {
        let service = JobNormalizationService::from_config(&NormalizationConfig::default()).unwrap();
        let (slots, _) = parse_records(r#"[42, {"title": "sr. rust dev"}, null]"#).unwrap();

        let raws = job_records(&slots);
        let items = service.batch_normalize(raws).await;
        let output = merge_results(slots, items);

        assert_eq!(output.len(), 3);
        assert_eq!(output[0], 42);
        assert_eq!(output[1]["title"], "Senior Rust Developer");
        assert!(output[2].is_null());
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(parse_records("42").is_err());
    }
}
