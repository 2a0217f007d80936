use chrono::Month;
use harikerja::provider::HariliburClient;
use harikerja::service::WorkdayService;
use std::env::args;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harikerja=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} month year", args[0]);
        std::process::exit(2);
    }
    let year: i32 = args[2].parse()?;

    let service = WorkdayService::new(HariliburClient::new());
    match service.calculate(&args[1], year).await {
        Ok(report) => {
            let month_name = Month::try_from(report.month as u8)
                .map(|m| m.name().to_string())
                .unwrap_or_else(|_| report.month.to_string());
            println!(
                "Total working days in {} {}: {}",
                month_name, report.year, report.result.total_working_days
            );
            if report.result.national_holidays.is_empty() {
                println!("No national holidays fall on a working day this month.");
            } else {
                println!("National holidays on working days:");
                for holiday in &report.result.national_holidays {
                    println!("  {} - {}", holiday.date, holiday.name);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
