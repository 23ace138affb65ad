// File: crates/movie-stats/tests/end_to_end.rs
// Purpose: Load a CSV, build both views, and render them headlessly.

use chart_core::RenderOptions;
use movie_stats::{load_records_from_reader, DirectorRanking, GrossTrend, PipelineConfig};

const MOVIES: &str = "\
director_name,imdb_score,title_year,gross
Christopher Nolan,8.5,2012,448130642
Christopher Nolan,8.6,2014,187991439
Sam Mendes,6.8,2015,200074175
Anthony Russo,8.2,2016,407197282
Joss Whedon,7.5,2015,458991599
Zack Snyder,6.9,2016,330249062
Gore Verbinski,7.1,2007,309404152
Peter Jackson,7.5,2013,258355354
,7.1,2015,936627416
";

#[test]
fn csv_to_png() {
    let records = load_records_from_reader(MOVIES.as_bytes()).expect("load");
    let config = PipelineConfig::default();

    let trend = GrossTrend::build(&records, &config).expect("trend");
    assert_eq!(trend.series.iter().map(|p| p.year).collect::<Vec<_>>(), vec![2012, 2013, 2014, 2015, 2016]);
    // 2015 includes the row with no director.
    assert_eq!(trend.series[3].total_gross, 200074175.0 + 458991599.0 + 936627416.0);

    let ranking = DirectorRanking::build(&records, &config).expect("ranking");
    let names: Vec<&str> = ranking.bars.iter().map(|b| b.director.as_str()).collect();
    assert_eq!(names, vec!["Christopher Nolan", "Anthony Russo", "Joss Whedon", "Peter Jackson", "Gore Verbinski", "Zack Snyder"]);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    for chart in [trend.to_chart(), ranking.to_chart()] {
        let bytes = chart.render_to_png_bytes(&opts).expect("render");
        assert!(bytes.starts_with(&[137, 80, 78, 71]));
    }
}
