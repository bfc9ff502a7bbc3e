//! The static group configuration table.

use indexmap::IndexMap;

/// Group name to dataset pattern list, in reporting order.
///
/// One group per calibration/alignment workflow category. Built once at
/// startup and never mutated.
pub fn table() -> IndexMap<&'static str, Vec<&'static str>> {
    IndexMap::from([
        ("PPS", vec!["/*/Run202*PPSCalMaxTracks*PromptReco*/ALCA*"]),
        (
            "TkAl",
            vec![
                "/*/Run202*-TkAlCosmics0T-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlCosmicsInCollisions-PromptReco-v*/ALCARECO",
                "/*/Run202*-TkAlMinBias-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlZMuMu-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlMuonIsolated-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlDiMuonAndVertex-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlUpsilonMuMu-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlJpsiMuMu-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlJetHT-PromptReco*/ALCARECO",
                "/*/Run202*-TkAlV0s-PromptReco*/ALCARECO/",
            ],
        ),
        (
            "BRIL",
            vec![
                "/*/Run202*-AlCaPCCZeroBias-PromptReco*/ALCARECO",
                "/*/Run202*-AlCaPCCRandom-PromptReco*/ALCARECO",
            ],
        ),
        (
            "ECAL",
            vec![
                "/*/Run202*-EcalUncalWElectron-PromptReco*/ALCARECO",
                "/*/Run202*-EcalUncalZElectron-PromptReco*/ALCARECO",
            ],
        ),
        (
            "Pixel",
            vec![
                "/*/Run202*SiPixelCalSingleMuon*PromptReco*/ALCARECO",
                "/*/Run202*SiPixelCalSingleMuonTight*PromptReco*/ALCARECO",
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_configuration_order() {
        let names: Vec<&str> = table().keys().copied().collect();
        assert_eq!(names, vec!["PPS", "TkAl", "BRIL", "ECAL", "Pixel"]);
    }
}
