//! Demo Binary
//!
//! Seats a table of random players and deals a few hands, moving the
//! button each time. Ctrl-C cancels the hand in progress.

use holdem::gameroom::*;

const HANDS: usize = 5;
const SEATS: usize = 6;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    holdem::log()?;
    let (abort, cancel) = cancellation();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, cancelling the hand");
            abort.abort();
        }
    });
    let (events, _) = tokio::sync::broadcast::channel::<Event>(64);
    spectate(events.subscribe());
    let mut seats = (0..SEATS)
        .map(|i| {
            let mut player = Player::new(format!("fish{}", i));
            let handle = player.ready()?;
            Actor::spawn(handle, Fish);
            Ok(Some(player))
        })
        .collect::<anyhow::Result<Vec<Option<Player>>>>()?;
    for hand in 0..HANDS {
        let config = Config::default().with_button(button(&seats, hand));
        let mut round = Round::new(seats, config)?
            .with_sink(events.clone())
            .with_cancel(cancel.clone());
        let result = round.play().await;
        log::info!("hand {}\n{}", hand, round);
        for settlement in result? {
            log::info!("{}", settlement);
        }
        seats = round.into_seats();
        seats.iter_mut().flatten().for_each(Player::reset);
        if seats.iter().flatten().filter(|p| p.stack() > 0).count() < 2 {
            break;
        }
    }
    Ok(())
}

/// the first seat with chips, counting from `hand`
fn button(seats: &[Option<Player>], hand: usize) -> usize {
    (hand..hand + seats.len())
        .map(|i| i % seats.len())
        .find(|i| seats[*i].as_ref().is_some_and(|p| p.stack() > 0))
        .unwrap_or_default()
}

/// log every event as one line of JSON
fn spectate(mut events: tokio::sync::broadcast::Receiver<Event>) {
    tokio::spawn(async move {
        use tokio::sync::broadcast::error::RecvError;
        loop {
            match events.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => log::debug!("{}", json),
                    Err(e) => log::warn!("unserializable event: {}", e),
                },
                Err(RecvError::Lagged(n)) => log::warn!("spectator missed {} events", n),
                Err(RecvError::Closed) => break,
            }
        }
    });
}
