use spkmeans::SphericalKmeans;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: term-weight vectors -> spherical k-means -> concepts.
    //
    // It intentionally stays small: it exists primarily to show how a caller
    // consumes the ClusterResult (labels, sizes, top-weighted terms).

    // Tiny vocabulary; two obvious topics.
    let vocab = ["rust", "compiler", "borrow", "pasta", "sauce", "oven"];
    let docs: Vec<Vec<f32>> = vec![
        // Topic A: programming
        vec![3.0, 1.0, 2.0, 0.0, 0.0, 0.0],
        vec![2.0, 2.0, 1.0, 0.0, 0.0, 1.0],
        vec![4.0, 1.0, 1.0, 0.0, 1.0, 0.0],
        // Topic B: cooking
        vec![0.0, 0.0, 0.0, 2.0, 3.0, 1.0],
        vec![0.0, 1.0, 0.0, 3.0, 1.0, 2.0],
        vec![1.0, 0.0, 0.0, 2.0, 2.0, 2.0],
    ];

    let (result, stats) = SphericalKmeans::new(2)
        .with_stats(true)
        .fit_with_stats(&docs)?;
    let stats = stats.expect("stats were enabled");

    println!(
        "{} documents, {} words, k={}",
        result.n_docs(),
        result.n_words(),
        result.k()
    );
    println!(
        "converged after {} iterations, quality {:.4}",
        result.iterations(),
        result.quality()
    );
    println!(
        "phase times: assign {:?}, concepts {:?}, quality {:?}",
        stats.assign_time, stats.concept_time, stats.quality_time
    );

    for (i, p) in result.partitions().iter().enumerate() {
        println!("partition {} ({} docs): {:?}", i, p.len(), p.members());
        for (dim, weight) in result.top_dimensions(i, 3) {
            println!("   {:<10} {:.3}", vocab[dim], weight);
        }
    }

    Ok(())
}
