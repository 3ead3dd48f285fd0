// GET request example
//
// Builds a client with connect and response timeouts and decodes a JSON
// response into a typed struct.
//
// Run with: cargo run -p webs-client --example get

use std::time::Duration;

use serde::Deserialize;
use webs_client::prelude::*;

const DECK_URL: &str = "https://deckofcardsapi.com/api/deck/new/shuffle/?deck_count=1";

#[derive(Debug, Deserialize)]
struct DeckOfCards {
    #[serde(rename = "deck_id")]
    id: String,
    remaining: u32,
}

fn build_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(2))
        .response_timeout(Duration::from_secs(3))
        .build()
}

async fn get_deck_of_cards(client: &Client) -> Result<DeckOfCards> {
    let response = client.get(DECK_URL, &HeaderMap::new()).await?;
    response.json()
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = build_client();

    match get_deck_of_cards(&client).await {
        Ok(deck) => println!("Deck {} has {} cards remaining", deck.id, deck.remaining),
        Err(e) if e.is_timeout() || e.is_connection() => {
            eprintln!("Deck service unreachable: {e}");
        }
        Err(e) => return Err(e.into()),
    }

    // The same lookup served from a fixture instead of the network.
    let registry = MockRegistry::new();
    registry.start();
    registry.add_mock(
        Mock::new(Method::GET, DECK_URL).respond_with(200, r#"{"deck_id":"fixture","remaining":52}"#),
    );

    if let Some(mock) = registry.lookup(&Method::GET, DECK_URL, "") {
        let deck: DeckOfCards = mock.response()?.json()?;
        println!("Fixture deck {} has {} cards remaining", deck.id, deck.remaining);
    }

    Ok(())
}
