use embassy_time::{Duration, Ticker};
use esp_println::println;
use resistouch::{ScreenPoint, TouchEdge};

use super::{config::TOUCH_POLL_MS, types::TouchDriver};

#[embassy_executor::task]
pub(crate) async fn touch_task(mut reader: TouchDriver) {
    let mut ticker = Ticker::every(Duration::from_millis(TOUCH_POLL_MS));
    let mut last: Option<ScreenPoint> = None;

    loop {
        ticker.next().await;
        let sample = match reader.try_poll() {
            Ok(sample) => sample,
            Err(err) => {
                println!("touch: read_failed err={:?}", err);
                None
            }
        };

        match TouchEdge::between(last, sample) {
            Some(TouchEdge::Down(point)) => {
                println!(
                    "touch: down x={} y={} on_screen={}",
                    point.x,
                    point.y,
                    point.on_screen()
                );
            }
            Some(TouchEdge::Move(point)) => {
                println!("touch: move x={} y={}", point.x, point.y);
            }
            Some(TouchEdge::Up(point)) => {
                println!("touch: up x={} y={}", point.x, point.y);
            }
            None => {}
        }
        last = sample;
    }
}
