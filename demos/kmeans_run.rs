//! Continuous k-means run printed to the console.
//!
//! Run with `RUST_LOG=debug cargo run --example kmeans_run` to see the
//! engine's own logging alongside the drained snapshots.

use pointspace::{
    drain_into, snapshot_channel, AlgorithmKind, RenderSink, RunConfig, SeriesMap, Session,
    SessionError,
};

struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn clear(&mut self) {
        println!("---");
    }

    fn replace_series(&mut self, series: &SeriesMap) {
        for (label, points) in series {
            let coords: Vec<String> = points
                .iter()
                .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                .collect();
            println!("{label}: {}", coords.join(" "));
        }
    }
}

fn main() -> Result<(), SessionError> {
    pointspace::init();

    let text = "@a\tred\t1,1\n\
                @b\tred\t1,2\n\
                @c\tred\t2,1\n\
                @d\tblue\t9,9\n\
                @e\tblue\t9,8\n\
                @f\tblue\t8,9\n";

    let mut session = Session::new();
    session.load_text(text)?;
    println!(
        "loaded {} records, {} labels: {:?}",
        session.dataset().lock().unwrap().len(),
        session.label_count(),
        session.label_names()
    );

    let (tx, rx) = snapshot_channel();
    let run = session.start(
        AlgorithmKind::KMeans,
        RunConfig::new(10, 2, true),
        2,
        Some(42),
        tx,
    )?;
    run.execute().expect("run was idle");
    run.wait();

    let mut sink = ConsoleSink;
    let applied = drain_into(&rx, &mut sink);
    println!("--- {applied} snapshots applied");
    Ok(())
}
