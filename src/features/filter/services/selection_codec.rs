//! Shareable encoding of [`SelectionState`].
//!
//! The state travels as up to three query parameters (`province`, `regency`,
//! `district`) holding decimal ids. Absent levels are omitted entirely, and
//! anything that does not parse as an id decodes to "not selected".

use std::collections::{BTreeMap, HashMap};

use crate::features::filter::models::{Level, SelectionState};

/// Read access to a flat string-keyed parameter set
pub trait ParamSource {
    fn get_param(&self, key: &str) -> Option<&str>;
}

impl ParamSource for HashMap<String, String> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn get_param(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Parse one id value; empty or malformed input is `None`
pub fn parse_value(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn decode<P: ParamSource + ?Sized>(params: &P) -> SelectionState {
    let read = |level: Level| params.get_param(level.key()).and_then(parse_value);

    SelectionState {
        province_id: read(Level::Province),
        regency_id: read(Level::Regency),
        district_id: read(Level::District),
    }
}

pub fn encode(state: &SelectionState) -> BTreeMap<String, String> {
    Level::ALL
        .into_iter()
        .filter_map(|level| {
            state
                .get(level)
                .map(|id| (level.key().to_string(), id.to_string()))
        })
        .collect()
}

/// Query string in hierarchy order, e.g. `province=31&regency=3171`
pub fn to_query_string(state: &SelectionState) -> String {
    Level::ALL
        .into_iter()
        .filter_map(|level| state.get(level).map(|id| format!("{}={}", level.key(), id)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Split a raw query string into decoded pairs, in the order they appear.
///
/// Repeated keys are all kept; `+` is a space and an escape that does not
/// decode to UTF-8 is left as written.
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_valid_ids() {
        let state = decode(&params(&[
            ("province", "1"),
            ("regency", "10"),
            ("district", "100"),
        ]));

        assert_eq!(state.province_id, Some(1));
        assert_eq!(state.regency_id, Some(10));
        assert_eq!(state.district_id, Some(100));
    }

    #[test]
    fn test_decode_malformed_values_are_absent() {
        let state = decode(&params(&[("regency", "abc")]));
        assert!(state.is_empty());

        let state = decode(&params(&[
            ("province", ""),
            ("regency", "1.5"),
            ("district", "12abc"),
        ]));
        assert!(state.is_empty());
    }

    #[test]
    fn test_decode_trims_and_ignores_unknown_keys() {
        let state = decode(&params(&[("province", " 31 "), ("village", "7")]));

        assert_eq!(
            state,
            SelectionState {
                province_id: Some(31),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_encode_omits_absent_levels() {
        let state = SelectionState {
            province_id: Some(1),
            regency_id: None,
            district_id: Some(100),
        };

        let encoded = encode(&state);
        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded.get("province").map(String::as_str), Some("1"));
        assert!(!encoded.contains_key("regency"));
        assert_eq!(encoded.get("district").map(String::as_str), Some("100"));

        assert!(encode(&SelectionState::default()).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let states = [
            SelectionState::default(),
            SelectionState {
                province_id: Some(1),
                ..Default::default()
            },
            SelectionState {
                province_id: Some(-5),
                regency_id: Some(i64::MAX),
                district_id: Some(0),
            },
        ];

        for state in states {
            assert_eq!(decode(&encode(&state)), state);
        }
    }

    #[test]
    fn test_to_query_string() {
        let state = SelectionState {
            province_id: Some(31),
            regency_id: Some(3171),
            district_id: None,
        };
        assert_eq!(to_query_string(&state), "province=31&regency=3171");
        assert_eq!(to_query_string(&SelectionState::default()), "");
    }

    #[test]
    fn test_parse_query_keeps_order_and_repeats() {
        let pairs = parse_query("province=1&province=2&regency=&district");

        assert_eq!(
            pairs,
            vec![
                ("province".to_string(), "1".to_string()),
                ("province".to_string(), "2".to_string()),
                ("regency".to_string(), String::new()),
                ("district".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_query_decodes_escapes() {
        assert_eq!(
            parse_query("?province=%2031+&regency=%FF"),
            vec![
                ("province".to_string(), " 31 ".to_string()),
                ("regency".to_string(), "%FF".to_string()),
            ]
        );
        assert!(parse_query("").is_empty());
    }
}
