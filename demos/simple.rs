use harikerja::calendar::{compute, from_ymd, HolidayRecord};

fn main() {
    let holidays = vec![HolidayRecord {
        date: from_ymd(2024, 12, 25),
        name: "Hari Raya Natal".to_string(),
        national: true,
    }];
    let result = compute(12, 2024, &holidays).unwrap();
    println!("{:?}", result);
}
