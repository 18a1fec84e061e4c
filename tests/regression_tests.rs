use states_ranker::output::format_tsv;
use states_ranker::scoring::{rank_states, AttributeKey, WeightConfig};
use states_ranker::states::{default_states, parse_states, StateRecord};

const FIXTURE: &str = "\
name,conservativeness,beauty,cost,average_temp,property_taxes,property_appreciation,population_per_square_mile,crime_rate,education,is_coastal
Seaside,30,20,40,60,30,2.0,100,20,25,true
Prairie,10,40,5,50,10,5.0,30,35,20,false
Harbor,45,5,45,65,40,3.0,400,10,10,true
Upland,20,30,20,45,20,4.0,60,30,30,false
";

fn fixture() -> Vec<StateRecord> {
    parse_states(FIXTURE.as_bytes()).unwrap()
}

fn ranking(states: &[StateRecord], config: &WeightConfig) -> Vec<(String, f64)> {
    rank_states(states, config)
        .into_iter()
        .map(|s| (s.state.name, s.score))
        .collect()
}

fn expected(golden: &[(&str, f64)]) -> Vec<(String, f64)> {
    golden.iter().map(|(n, s)| (n.to_string(), *s)).collect()
}

#[test]
fn fixture_default_ranking() {
    let ranked = ranking(&fixture(), &WeightConfig::default());
    assert_eq!(
        ranked,
        expected(&[
            ("Prairie", 325.0),
            ("Upland", 289.0),
            ("Seaside", 242.0),
            ("Harbor", 228.0),
        ])
    );
}

#[test]
fn fixture_coastal_priority_reorders() {
    let config = WeightConfig::default().prioritize(AttributeKey::Coastal);
    let ranked = ranking(&fixture(), &config);

    // Seaside overtakes Upland once the coastal bonus is doubled and the rest halved
    assert_eq!(
        ranked,
        expected(&[
            ("Prairie", 162.5),
            ("Seaside", 158.5),
            ("Harbor", 151.5),
            ("Upland", 144.5),
        ])
    );
}

#[test]
fn inland_states_never_earn_coastal_points() {
    let states = fixture();
    for config in [
        WeightConfig::default(),
        WeightConfig::default().prioritize(AttributeKey::Coastal),
    ] {
        for scored in rank_states(&states, &config) {
            if !scored.state.is_coastal {
                let coastal = scored.breakdown.get(AttributeKey::Coastal).unwrap();
                assert_eq!(coastal.points, 0.0);
            }
        }
    }
}

#[test]
fn non_finite_dataset_value_ranks_last() {
    let csv = "\
name,conservativeness,beauty,cost,average_temp,property_taxes,property_appreciation,population_per_square_mile,crime_rate,education,is_coastal
Broken,1,1,1,55,1,1.0,50,NaN,1,true
Good,1,1,1,55,1,9.0,50,50,1,true
";
    let states = parse_states(csv.as_bytes()).unwrap();
    let ranked = rank_states(&states, &WeightConfig::default());

    assert_eq!(ranked[0].state.name, "Good");
    assert_eq!(ranked[0].score, 470.0);
    assert_eq!(ranked[1].state.name, "Broken");
    assert!(ranked[1].score.is_nan());
}

#[test]
fn bundled_dataset_default_ranking() {
    let ranked = ranking(&default_states().unwrap(), &WeightConfig::default());
    assert_eq!(ranked, expected(&DEFAULT_RANKING));
}

#[test]
fn bundled_dataset_coastal_ranking() {
    let config = WeightConfig::default().prioritize(AttributeKey::Coastal);
    let ranked = ranking(&default_states().unwrap(), &config);
    assert_eq!(ranked, expected(&COASTAL_RANKING));
}

#[test]
fn default_output_is_byte_identical_across_runs() {
    let states = default_states().unwrap();
    let first = format_tsv(&rank_states(&states, &WeightConfig::default()));
    let second = format_tsv(&rank_states(&states, &WeightConfig::default()));
    assert_eq!(first, second);
    assert!(first.starts_with("1\t318.00\tMaine\n2\t317.00\tWest Virginia\n"));
}

const DEFAULT_RANKING: [(&str, f64); 50] = [
    ("Maine", 318.0),
    ("West Virginia", 317.0),
    ("Utah", 297.0),
    ("Virginia", 283.0),
    ("Arkansas", 282.0),
    ("Mississippi", 279.0),
    ("New Hampshire", 279.0),
    ("Wyoming", 276.0),
    ("Kentucky", 274.0),
    ("Vermont", 271.0),
    ("North Carolina", 263.0),
    ("Oklahoma", 263.0),
    ("Iowa", 262.0),
    ("Alabama", 257.0),
    ("Connecticut", 256.0),
    ("Colorado", 252.0),
    ("Idaho", 252.0),
    ("Kansas", 252.0),
    ("Minnesota", 247.0),
    ("Nebraska", 245.0),
    ("New Jersey", 245.0),
    ("Oregon", 245.0),
    ("Delaware", 244.0),
    ("Rhode Island", 242.0),
    ("Massachusetts", 241.0),
    ("South Carolina", 240.0),
    ("Indiana", 238.0),
    ("New York", 237.0),
    ("Wisconsin", 229.0),
    ("Hawaii", 226.0),
    ("Ohio", 226.0),
    ("Georgia", 225.0),
    ("South Dakota", 225.0),
    ("Missouri", 224.0),
    ("North Dakota", 224.0),
    ("Washington", 224.0),
    ("Pennsylvania", 222.0),
    ("Arizona", 221.0),
    ("Tennessee", 220.0),
    ("Montana", 217.0),
    ("California", 212.0),
    ("Louisiana", 212.0),
    ("Florida", 210.0),
    ("Michigan", 208.0),
    ("Maryland", 204.0),
    ("New Mexico", 202.0),
    ("Nevada", 193.0),
    ("Illinois", 192.0),
    ("Alaska", 180.0),
    ("Texas", 168.0),
];

const COASTAL_RANKING: [(&str, f64); 50] = [
    ("Maine", 196.5),
    ("Virginia", 179.0),
    ("Mississippi", 177.0),
    ("New Hampshire", 177.0),
    ("North Carolina", 169.0),
    ("Alabama", 166.0),
    ("Connecticut", 165.5),
    ("New Jersey", 160.0),
    ("Oregon", 160.0),
    ("Delaware", 159.5),
    ("Rhode Island", 158.5),
    ("West Virginia", 158.5),
    ("Massachusetts", 158.0),
    ("South Carolina", 157.5),
    ("New York", 156.0),
    ("Hawaii", 150.5),
    ("Georgia", 150.0),
    ("Washington", 149.5),
    ("Utah", 148.5),
    ("California", 143.5),
    ("Louisiana", 143.5),
    ("Florida", 142.5),
    ("Arkansas", 141.0),
    ("Maryland", 139.5),
    ("Wyoming", 138.0),
    ("Kentucky", 137.0),
    ("Vermont", 135.5),
    ("Oklahoma", 131.5),
    ("Iowa", 131.0),
    ("Alaska", 127.5),
    ("Colorado", 126.0),
    ("Idaho", 126.0),
    ("Kansas", 126.0),
    ("Minnesota", 123.5),
    ("Nebraska", 122.5),
    ("Texas", 121.5),
    ("Indiana", 119.0),
    ("Wisconsin", 114.5),
    ("Ohio", 113.0),
    ("South Dakota", 112.5),
    ("Missouri", 112.0),
    ("North Dakota", 112.0),
    ("Pennsylvania", 111.0),
    ("Arizona", 110.5),
    ("Tennessee", 110.0),
    ("Montana", 108.5),
    ("Michigan", 104.0),
    ("New Mexico", 101.0),
    ("Nevada", 96.5),
    ("Illinois", 96.0),
];
