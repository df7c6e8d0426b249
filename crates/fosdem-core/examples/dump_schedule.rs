use fosdem_core::ScheduleScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = ScheduleScraper::new()?;

    println!("Fetching {}...\n", scraper.config().schedule_path);

    let events = scraper.fetch_schedule().await?;
    for event in &events {
        println!("{}  {:30}  {}", event.start, event.title_text, event.title_link);
    }

    println!("\n{} events total.", events.len());
    Ok(())
}
