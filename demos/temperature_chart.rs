use soflo::{envelope_series, mean_series, County, Soflo, SofloError};

#[tokio::main]
async fn main() -> Result<(), SofloError> {
    let client = Soflo::new().await?;

    let window = client.validate_window("06/2010", "06/2011")?;
    let report = client
        .monthly_report()
        .location(County::MiamiDade)
        .window(window)
        .call()
        .await?;

    let mean = mean_series(&report);
    let envelope = envelope_series(&report);

    println!("Monthly mean temperature (°F):");
    for point in &mean.points {
        println!("  {}  {:6.2}", point.month.format("%Y-%m"), point.value);
    }

    println!("\nMax/min envelope:");
    for (max, min) in envelope.max_points.iter().zip(&envelope.min_points) {
        println!(
            "  {}  {:6.2} .. {:6.2}",
            max.month.format("%Y-%m"),
            min.value,
            max.value
        );
    }

    Ok(())
}
