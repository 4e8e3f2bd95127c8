//! The eight descriptive lines preceding the hourly rows.

use std::{fs, path::Path};

use crate::error::{SynthError, SynthResult};

pub const HEADER_LINES: usize = 8;

/// Qingdao Intl. AP (TMYx). Descriptive only, EnergyPlus does not derive anything
/// from the hourly rows here.
pub const DEFAULT_HEADER: &str = r#"LOCATION,Qingdao.Intl.AP,SD,CHN,SRC-TMYx,548570,35.5,119.375,8.0,10.1
DESIGN CONDITIONS,1,2021 ASHRAE Handbook -- Fundamentals - Chapter 14 Climatic Design Information,,Heating,1,-8.8,-6.9,-18.9,0.7,-1.4,-16.9,0.9,-0.9,11.4,-2.6,10.4,-2.2,2.7,340,0.487,Cooling,8,7.3,33.1,24.3,31.8,23.8,30.2,23.5,27.1,30.0,26.5,29.1,25.9,28.2,4.4,180,26.3,21.9,28.7,25.9,21.4,28.4,25.1,20.4,27.6,87.0,30.0,83.9,29.2,80.9,28.7,30.1,Extremes,10.2,9.0,7.9,-11.8,35.9,1.9,1.8,-13.1,37.2,-14.2,38.3,-15.2,39.3,-16.6,40.6
TYPICAL/EXTREME PERIODS,6,Summer - Week Nearest Max Temperature For Period,Extreme,7/27,8/ 2,Summer - Week Nearest Average Temperature For Period,Typical,6/29,7/ 5,Winter - Week Nearest Min Temperature For Period,Extreme,1/ 6,1/12,Winter - Week Nearest Average Temperature For Period,Typical,1/13,1/19,Autumn - Week Nearest Average Temperature For Period,Typical,10/20,10/26,Spring - Week Nearest Average Temperature For Period,Typical,4/12,4/18
GROUND TEMPERATURES,3,.5,,,,2.96,1.88,3.79,6.78,14.60,20.64,24.71,25.95,23.83,19.15,12.89,7.08,2,,,,6.92,5.00,5.39,6.98,12.21,16.94,20.73,22.76,22.33,19.67,15.36,10.78,4,,,,10.20,8.23,7.80,8.40,11.36,14.55,17.47,19.50,19.98,18.83,16.29,13.20
HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0
COMMENTS 1,""
COMMENTS 2,""
DATA PERIODS,1,1,Data,Sunday,1/ 1,12/31"#;

const KEYWORDS: [&str; HEADER_LINES] = [
    "LOCATION",
    "DESIGN CONDITIONS",
    "TYPICAL/EXTREME PERIODS",
    "GROUND TEMPERATURES",
    "HOLIDAYS/DAYLIGHT SAVINGS",
    "COMMENTS 1",
    "COMMENTS 2",
    "DATA PERIODS",
];

#[derive(Debug, Clone, PartialEq)]
pub struct EpwHeader {
    text: String,
}

impl Default for EpwHeader {
    fn default() -> Self {
        EpwHeader {
            text: DEFAULT_HEADER.to_string(),
        }
    }
}

impl EpwHeader {
    /// Eight lines, each starting with its EPW keyword in order.
    pub fn parse(text: &str) -> SynthResult<Self> {
        let text = text.trim_end_matches(['\r', '\n']);
        let lines: Vec<&str> = text.lines().collect();

        if lines.len() != HEADER_LINES {
            return Err(SynthError::InvalidHeader {
                reason: format!("expected {HEADER_LINES} lines, found {}", lines.len()),
            });
        }

        for (line, keyword) in lines.iter().zip(KEYWORDS) {
            if !line.starts_with(keyword) {
                return Err(SynthError::InvalidHeader {
                    reason: format!("expected a line starting with '{keyword}', found '{line}'"),
                });
            }
        }

        Ok(EpwHeader {
            text: text.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> SynthResult<Self> {
        EpwHeader::parse(&fs::read_to_string(path)?)
    }

    /// Header text without a trailing newline.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_accept_default_header() {
        let header = EpwHeader::parse(DEFAULT_HEADER).unwrap();
        assert_eq!(header, EpwHeader::default());
        assert_eq!(header.as_str().lines().count(), HEADER_LINES);
    }

    #[test]
    fn should_strip_trailing_newline() {
        let text = format!("{DEFAULT_HEADER}\n");
        let header = EpwHeader::parse(&text).unwrap();
        assert_eq!(header.as_str(), DEFAULT_HEADER);
    }

    #[test]
    fn should_reject_short_header() {
        let text: String = DEFAULT_HEADER.lines().take(7).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            EpwHeader::parse(&text),
            Err(SynthError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn should_reject_misordered_header() {
        let mut lines: Vec<&str> = DEFAULT_HEADER.lines().collect();
        lines.swap(5, 6);
        assert!(EpwHeader::parse(&lines.join("\n")).is_err());
    }
}
