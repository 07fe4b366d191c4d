use soflo::{marker_bounds, County, Soflo, SofloError};

#[tokio::main]
async fn main() -> Result<(), SofloError> {
    let client = Soflo::new().await?;

    let attractions = client.attractions(County::PalmBeach).await?;
    println!("Tourist attractions in {}:", County::PalmBeach);
    for attraction in &attractions {
        println!(
            "  {} ({:.4}, {:.4})",
            attraction.name, attraction.coordinate.0, attraction.coordinate.1
        );
    }

    if let Some(bounds) = marker_bounds(&attractions) {
        println!(
            "\nMap center: ({:.4}, {:.4})",
            bounds.center.0, bounds.center.1
        );
    }

    Ok(())
}
