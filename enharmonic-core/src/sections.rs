//! # Section Data Module
//!
//! Static Helmholtz pitch-name data grouped by octave section. Each section
//! lists twelve lines in ascending pitch order, one per semitone, and each line
//! holds every spelling of that pitch separated by spaces.
//!
//! ## Token conventions
//! - Big registers use upper-case letters with a `-N` suffix (`C-1`, `#G-2`)
//! - The great octave uses bare upper-case letters (`C`, `bB`)
//! - Small registers use lower-case letters with an optional `N` suffix (`e1`)
//! - Accidentals prefix the letter: `#` sharp, `X` double sharp, `b` flat, `bb` double flat

use serde::{Deserialize, Serialize};

/// One labelled octave band of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name, e.g. "大字一组".
    pub label: String,
    /// One line per semitone, lowest first.
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(label: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            label: label.into(),
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}

const STANDARD_SECTIONS: [(&str, [&str; 12]); 6] = [
    (
        "大字二组",
        [
            "C-2 #B-3 bbD-2",
            "#C-2 bD-2 XB-3",
            "D-2 XC-2 bbE-2",
            "#D-2 bE-2 bbF-2",
            "E-2 XD-2 bF-2",
            "F-2 #E-2 bbG-2",
            "#F-2 bG-2 XE-2",
            "G-2 XF-2 bbA-2",
            "#G-2 bA-2",
            "A-2 XG-2 bbB-2",
            "#A-2 bB-2 bbC-1",
            "B-2 bC-1 XA-2",
        ],
    ),
    (
        "大字一组",
        [
            "C-1 #B-2 bbD-1",
            "#C-1 bD-1 XB-2",
            "D-1 XC-1 bbE-1",
            "#D-1 bE-1 bbF-1",
            "E-1 XD-1 bF-1",
            "F-1 #E-1 bbG-1",
            "#F-1 bG-1 XE-1",
            "G-1 XF-1 bbA-1",
            "#G-1 bA-1",
            "A-1 XG-1 bbB-1",
            "#A-1 bB-1 bbC",
            "B-1 XA-1 bC",
        ],
    ),
    (
        "大字组",
        [
            "C #B-1 bbD",
            "#C bD XB-1",
            "D XC bbE",
            "#D bE bbF",
            "E XD bF",
            "F #E bbG",
            "#F bG XE",
            "G XF bbA",
            "#G bA",
            "A XG bbB",
            "#A bB bbc",
            "B XA bc",
        ],
    ),
    (
        "小字组",
        [
            "c #B bbd",
            "#c bd XB",
            "d Xc bbe",
            "#d be bbf",
            "e Xd bf",
            "f #e bbg",
            "#f bg Xe",
            "g Xf bba",
            "#g ba",
            "a Xg bbb",
            "#a bb bbc1",
            "b Xa bc1",
        ],
    ),
    (
        "小字一组",
        [
            "c1 #b bbd1",
            "#c1 bd1 Xb",
            "d1 Xc1 bbe1",
            "#d1 be1 bbf1",
            "e1 Xd1 bf1",
            "f1 #e1 bbg1",
            "#f1 bg1 Xe1",
            "g1 Xf1 bba1",
            "#g1 ba1",
            "a1 Xg1 bbb1",
            "#a1 bb1 bbc2",
            "b1 Xa1 bc2",
        ],
    ),
    (
        "小字二组",
        [
            "c2 #b1 bbd2",
            "#c2 bd2 Xb1",
            "d2 Xc2 bbe2",
            "#d2 be2 bbf2",
            "e2 Xd2 bf2",
            "f2 #e2 bbg2",
            "#f2 bg2 Xe2",
            "g2 Xf2 bba2",
            "#g2 ba2",
            "a2 Xg2 bbb2",
            "#a2 bb2 bbc3",
            "b2 Xa2 bc3",
        ],
    ),
];

/// Returns the six standard sections, from "大字二组" up to "小字二组".
pub fn standard_sections() -> Vec<Section> {
    STANDARD_SECTIONS
        .iter()
        .map(|(label, lines)| Section::new(*label, lines))
        .collect()
}
