use crate::record::Record;

/// Demo records written by `init`: (id, custodian, action, timestamp).
pub const FIXTURES: [(&str, &str, &str, &str); 3] = [
    ("A", "LUX", "FEED", "2018-10-25"),
    ("B", "NTUB", "PLAY", "2018-10-26"),
    ("C", "TEST", "SHOW", "2018-10-27"),
];

pub fn fixtures() -> Vec<Record> {
    FIXTURES
        .iter()
        .map(|(id, custodian, action, timestamp)| {
            Record::build(*id, *custodian, *action, *timestamp)
        })
        .collect()
}
