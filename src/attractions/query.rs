//! SPARQL query construction for tourist-attraction lookup.
//!
//! Wikidata vocabulary used here: P31 instance-of, P279 subclass-of,
//! Q570116 tourist attraction, P625 coordinate location, P131 located in
//! administrative division.

use crate::types::location::County;

impl County {
    /// Wikidata QIDs of the administrative divisions searched for this
    /// county's attractions.
    pub fn admin_division_qids(&self) -> &'static [&'static str] {
        match self {
            // Palm Beach (town), Jupiter (town), Boca Raton (city)
            County::PalmBeach => &["Q695411", "Q986329", "Q29422"],
            // Broward County, Coconut Creek, Coral Springs, Pompano Beach,
            // Fort Lauderdale, Davie
            County::Broward => &[
                "Q494624", "Q988906", "Q505557", "Q671458", "Q165972", "Q985438",
            ],
            // Miami-Dade County, North Miami Beach, North Miami, Miami,
            // Miami Beach, Homestead, Wynwood
            County::MiamiDade => &[
                "Q468557", "Q988909", "Q980428", "Q8652", "Q201516", "Q280557", "Q8040258",
            ],
        }
    }
}

/// Builds the attraction query for one county: anything that is (transitively)
/// a tourist attraction, has coordinates and an English label, and sits in
/// one of the county's administrative divisions.
pub fn attraction_query(county: County) -> String {
    let union = county
        .admin_division_qids()
        .iter()
        .map(|qid| format!("{{?attraction wdt:P131 wd:{}}}", qid))
        .collect::<Vec<_>>()
        .join("\n        UNION\n        ");

    format!(
        r#"PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>

SELECT DISTINCT ?attraction ?attractionLabel ?gps
WHERE {{
    ?attraction (wdt:P31/wdt:P279*) wd:Q570116;
        wdt:P625 ?gps;
        rdfs:label ?attractionLabel.

    {union}

    FILTER(LANG(?attractionLabel) = "en")
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_mentions_every_division_of_the_county() {
        for county in County::ALL {
            let query = attraction_query(county);
            for qid in county.admin_division_qids() {
                assert!(
                    query.contains(&format!("wd:{}", qid)),
                    "{county} query missing {qid}"
                );
            }
            assert!(query.contains("wd:Q570116"));
            assert!(query.contains("wdt:P625"));
        }
    }

    #[test]
    fn union_count_matches_division_count() {
        let query = attraction_query(County::Broward);
        assert_eq!(
            query.matches("UNION").count(),
            County::Broward.admin_division_qids().len() - 1
        );
    }
}
