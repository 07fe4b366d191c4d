use soflo::{table_rows, ReferenceLocation, Soflo, SofloError, TABLE_COLUMNS};

#[tokio::main]
async fn main() -> Result<(), SofloError> {
    let client = Soflo::new().await?;

    let window = client.validate_window("01/2015", "03/2015")?;
    let report = client
        .monthly_report()
        .location(ReferenceLocation::WestPalmBeach)
        .window(window)
        .call()
        .await?;

    println!("{:<10} {:>24} {:>24} {:>25}", TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2], TABLE_COLUMNS[3]);
    for row in table_rows(&report) {
        let [date, avg_max, avg_min, avg_mean] = row.cells();
        println!("{:<10} {:>24} {:>24} {:>25}", date, avg_max, avg_min, avg_mean);
    }

    Ok(())
}
