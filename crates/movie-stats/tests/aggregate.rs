// File: crates/movie-stats/tests/aggregate.rs
// Purpose: Gross-by-year and director-ranking aggregation: examples, boundaries, and properties.

use movie_stats::{director_averages, top_directors, yearly_gross, DirectorAverage, PipelineConfig, Record, Summary, YearlyGross};

fn gross(year: i32, gross: f64) -> Record {
    Record { director: String::new(), score: None, year: Some(year), gross: Some(gross) }
}

fn scored(director: &str, score: f64) -> Record {
    Record { director: director.to_string(), score: Some(score), year: None, gross: None }
}

fn names(list: &[DirectorAverage]) -> Vec<&str> {
    list.iter().map(|d| d.director.as_str()).collect()
}

/// Deterministic pseudo-random records covering every absent/present combination.
fn mixed_records(n: usize) -> Vec<Record> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..n)
        .map(|_| {
            let r = next();
            Record {
                director: if r % 7 == 0 { String::new() } else { format!("director {}", r % 23) },
                score: if r % 5 == 0 { None } else { Some(((r >> 8) % 100) as f64 / 10.0) },
                year: if r % 11 == 0 { None } else { Some(2000 + ((r >> 16) % 20) as i32) },
                gross: if r % 13 == 0 { None } else { Some(((r >> 24) % 1_000_000) as f64 * 1000.0) },
            }
        })
        .collect()
}

#[test]
fn sums_gross_per_year() {
    let records = vec![gross(2010, 100.0), gross(2010, 50.0), gross(2011, 200.0)];
    assert_eq!(
        yearly_gross(&records, 2010),
        vec![
            YearlyGross { year: 2010, total_gross: 150.0 },
            YearlyGross { year: 2011, total_gross: 200.0 },
        ]
    );
}

#[test]
fn years_before_cutoff_and_absent_fields_are_excluded() {
    let records = vec![
        gross(2009, 1_000.0),
        gross(2012, 10.0),
        Record { director: String::new(), score: None, year: None, gross: Some(5.0) },
        Record { director: String::new(), score: None, year: Some(2012), gross: None },
        gross(2010, 1.0),
    ];
    assert_eq!(
        yearly_gross(&records, 2010),
        vec![
            YearlyGross { year: 2010, total_gross: 1.0 },
            YearlyGross { year: 2012, total_gross: 10.0 },
        ]
    );
    assert!(yearly_gross(&[gross(2009, 1.0)], 2010).is_empty());
    assert!(yearly_gross(&[], 2010).is_empty());
}

#[test]
fn top_six_directors_with_stable_ties() {
    let records = vec![
        scored("A", 8.0),
        scored("B", 7.0),
        scored("D", 5.0),
        scored("C", 10.0),
        scored("E", 5.0),
        scored("A", 9.0),
        scored("F", 5.0),
        scored("C", 10.0),
        scored("G", 5.0),
        scored("C", 10.0),
    ];
    let top = top_directors(&records, 6);
    assert_eq!(names(&top), vec!["C", "A", "B", "D", "E", "F"]);
    assert_eq!(top[0].average_score, 10.0);
    assert_eq!(top[1].average_score, 8.5);
    assert_eq!(top[2].average_score, 7.0);
    assert!(top[3..].iter().all(|d| d.average_score == 5.0));
}

#[test]
fn empty_director_is_excluded_and_short_lists_are_not_padded() {
    let records = vec![scored("", 10.0), scored("X", 6.0), scored("Y", 4.0)];
    let top = top_directors(&records, 6);
    assert_eq!(names(&top), vec!["X", "Y"]);
    // Names are compared exactly, whitespace included.
    let spaced = director_averages(&[scored(" ", 3.0), scored("X", 6.0)]);
    assert_eq!(names(&spaced), vec!["X", " "]);
}

#[test]
fn yearly_series_is_strictly_ascending_and_conserves_total() {
    let records = mixed_records(2_000);
    let series = yearly_gross(&records, 2010);
    assert!(series.windows(2).all(|w| w[0].year < w[1].year));
    assert!(series.iter().all(|p| p.year >= 2010));

    let expected: f64 = records
        .iter()
        .filter(|r| r.year.is_some_and(|y| y >= 2010))
        .filter_map(|r| r.gross)
        .sum();
    let got: f64 = series.iter().map(|p| p.total_gross).sum();
    assert!((expected - got).abs() <= expected.abs() * 1e-12, "{expected} vs {got}");
}

#[test]
fn ranking_excludes_only_lower_scores() {
    let records = mixed_records(2_000);
    let all = director_averages(&records);
    let top = top_directors(&records, 6);
    assert!(top.len() <= 6);
    assert!(top.windows(2).all(|w| w[0].average_score >= w[1].average_score));
    assert_eq!(&all[..top.len()], &top[..]);
    if let Some(last) = top.last() {
        assert!(all[top.len()..].iter().all(|d| d.average_score <= last.average_score));
    }
}

#[test]
fn pipeline_is_idempotent() {
    let records = mixed_records(500);
    let config = PipelineConfig::default();
    let a = Summary::compute(&records, &config);
    let b = Summary::compute(&records, &config);
    assert_eq!(a, b);
    for (x, y) in a.gross_by_year.iter().zip(&b.gross_by_year) {
        assert_eq!(x.total_gross.to_bits(), y.total_gross.to_bits());
    }
    for (x, y) in a.top_directors.iter().zip(&b.top_directors) {
        assert_eq!(x.average_score.to_bits(), y.average_score.to_bits());
    }
}
