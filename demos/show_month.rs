use harikerja::provider::HariliburClient;
use harikerja::service::{RequestState, RequestTracker, WorkdayService};
/// example to show a month's working-day report along with its holiday list
use std::env::args;

#[tokio::main]
async fn main() {
    let args: Vec<String> = args().collect();
    if args.len() < 3 {
        panic!("Usage: {} month year", args[0]);
    }
    let year: i32 = (&args[2]).parse().unwrap();

    let service = WorkdayService::new(HariliburClient::new());
    let mut tracker = RequestTracker::new();
    service.calculate_into(&mut tracker, &args[1], year).await;
    match tracker.state() {
        RequestState::Succeeded(report) => {
            println!("working days: {}", report.result.total_working_days);
            println!(
                "national holidays on working days: {:?}",
                report.result.national_holidays
            );
        }
        RequestState::Failed(message) => println!("failed: {}", message),
        state => println!("unexpected state: {:?}", state),
    }
}
