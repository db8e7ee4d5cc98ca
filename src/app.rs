use std::{
    io::{self, BufRead},
    sync::{mpsc, Arc},
    thread,
};

use pmap_core::{
    entities::{EnrichmentFields, Id},
    gateways::{
        directory::{DirectoryGateway, FetchError},
        map::MapGateway,
    },
    usecases::{self, Effect},
    view::ListViewState,
};

use crate::{cfg::Config, seed};

pub type FetchResult = Result<EnrichmentFields, FetchError>;

/// External events of a session: user input and fetch completions.
///
/// All state mutation happens on the one thread that drains the event
/// channel, so derivations never observe a torn update.
#[derive(Debug)]
pub enum Event {
    FilterChanged(String),
    PlaceClicked(Id),
    EnrichmentCompleted(Id, FetchResult),
    Quit,
}

pub fn run(
    cfg: Config,
    map: Box<dyn MapGateway>,
    directory: Arc<dyn DirectoryGateway + Send + Sync>,
) -> anyhow::Result<()> {
    let mut state = ListViewState::new(seed::default_places(), cfg.map.fallback_center());
    map.init(state.map_center(), cfg.map.zoom);
    for place in state.places() {
        if let Some(pos) = place.position {
            map.show_marker(&place.id, pos, &place.title);
        }
    }
    render(&state);

    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx.clone());

    while let Ok(event) = rx.recv() {
        match handle_event(&mut state, event) {
            Ok(Some(effects)) => {
                for effect in effects {
                    dispatch(effect, &state, &*map, &directory, &tx);
                }
                render(&state);
            }
            Ok(None) => break,
            Err(err) => log::warn!("Ignoring event: {err}"),
        }
    }
    Ok(())
}

/// Applies one event to the view state. Returns `None` when the session
/// is over.
pub fn handle_event(
    state: &mut ListViewState,
    event: Event,
) -> Result<Option<Vec<Effect>>, usecases::Error> {
    match event {
        Event::FilterChanged(text) => Ok(Some(usecases::set_filter_text(state, text))),
        Event::PlaceClicked(id) => usecases::select_place(state, &id).map(Some),
        Event::EnrichmentCompleted(id, result) => {
            usecases::apply_enrichment(state, &id, result).map(Some)
        }
        Event::Quit => Ok(None),
    }
}

fn dispatch(
    effect: Effect,
    state: &ListViewState,
    map: &dyn MapGateway,
    directory: &Arc<dyn DirectoryGateway + Send + Sync>,
    completions: &mpsc::Sender<Event>,
) {
    match effect {
        Effect::FetchEnrichment(id) => {
            let directory = Arc::clone(directory);
            let completions = completions.clone();
            thread::spawn(move || {
                let result = directory.fetch_business(&id);
                // The session may already be over.
                completions
                    .send(Event::EnrichmentCompleted(id, result))
                    .ok();
            });
        }
        Effect::SetMapCenter(center) => map.set_center(center),
        Effect::ShowMarker(id, pos) => {
            let title = state
                .place(&id)
                .map(|p| p.title.as_str())
                .unwrap_or_default();
            map.show_marker(&id, pos, title);
        }
        Effect::HideMarker(id) => map.hide_marker(&id),
        Effect::MoveMarker(id, pos) => map.move_marker(&id, pos),
        Effect::ActivateMarker(id) => map.set_marker_active(&id, true),
        Effect::DeactivateMarker(id) => map.set_marker_active(&id, false),
    }
}

/// Forwards stdin lines as events: `select <id>` clicks a place, `quit`
/// ends the session, anything else becomes the new filter text.
fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let event = parse_line(&line);
            let quit = matches!(event, Event::Quit);
            if tx.send(event).is_err() || quit {
                return;
            }
        }
        tx.send(Event::Quit).ok();
    });
}

fn parse_line(line: &str) -> Event {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") {
        return Event::Quit;
    }
    if let Some(id) = trimmed.strip_prefix("select ") {
        return Event::PlaceClicked(id.trim().into());
    }
    // Anything else is filter text, including the empty line.
    Event::FilterChanged(trimmed.to_owned())
}

fn render(state: &ListViewState) {
    println!();
    println!(
        "filter: {:?}  center: {}",
        state.filter_text(),
        state.map_center()
    );
    for place in state.filtered_places() {
        let selected = if state.selected() == Some(&place.id) {
            "*"
        } else {
            " "
        };
        let mut details = Vec::new();
        if let Some(rating) = &place.rating {
            details.push(format!("{:.1} stars", f64::from(rating.value)));
        }
        if !place.categories.is_empty() {
            let labels: Vec<_> = place.categories.iter().map(|c| c.label()).collect();
            details.push(labels.join("/"));
        }
        if let Some(phone) = &place.phone {
            details.push(phone.clone());
        }
        if let Some(address) = &place.address {
            details.push(address.single_line());
        }
        if place.has_error() {
            details.push("details unavailable".to_owned());
        }
        let details = if details.is_empty() {
            String::new()
        } else {
            format!(" — {}", details.join(", "))
        };
        println!("{selected} {} [{}]{details}", place.title, place.id);
        if let Some(review) = &place.review {
            println!("     {review}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmap_entities::geo::MapPoint;

    struct StubDirectory;

    impl DirectoryGateway for StubDirectory {
        fn fetch_business(&self, id: &Id) -> FetchResult {
            if id.as_str() == "guu-original-thurlow-vancouver" {
                Ok(EnrichmentFields {
                    title: Some("Guu Original Thurlow".into()),
                    phone: Some("(604) 685-8817".into()),
                    ..Default::default()
                })
            } else {
                Err(FetchError::Http(404))
            }
        }
    }

    fn new_state() -> ListViewState {
        ListViewState::new(
            seed::default_places(),
            Config::default().map.fallback_center(),
        )
    }

    fn visible_titles(state: &ListViewState) -> Vec<&str> {
        state.filtered_places().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn typing_a_filter_narrows_the_list() {
        let mut state = new_state();
        let effects = handle_event(&mut state, parse_line("guu")).unwrap().unwrap();
        assert_eq!(visible_titles(&state), vec!["Guu Japanese Restaurant"]);
        assert!(!effects.is_empty());
    }

    #[test]
    fn clicking_fetches_and_applies_the_business_details() {
        let mut state = new_state();
        let directory = StubDirectory;
        let id: Id = "guu-original-thurlow-vancouver".into();
        let effects = handle_event(&mut state, Event::PlaceClicked(id.clone()))
            .unwrap()
            .unwrap();
        assert!(effects.contains(&Effect::FetchEnrichment(id.clone())));
        // Run the fetch inline instead of on a worker thread.
        let result = directory.fetch_business(&id);
        handle_event(&mut state, Event::EnrichmentCompleted(id.clone(), result)).unwrap();
        let place = state.place(&id).unwrap();
        assert!(place.has_data());
        assert_eq!(place.title, "Guu Original Thurlow");
        assert_eq!(place.phone.as_deref(), Some("(604) 685-8817"));
    }

    #[test]
    fn failed_fetch_marks_the_place() {
        let mut state = new_state();
        let directory = StubDirectory;
        let id: Id = "phnom-penh-vancouver".into();
        handle_event(&mut state, Event::PlaceClicked(id.clone())).unwrap();
        let result = directory.fetch_business(&id);
        handle_event(&mut state, Event::EnrichmentCompleted(id.clone(), result)).unwrap();
        assert!(state.place(&id).unwrap().has_error());
    }

    #[test]
    fn quit_ends_the_session() {
        let mut state = new_state();
        assert_eq!(handle_event(&mut state, parse_line("quit")).unwrap(), None);
    }

    #[test]
    fn unknown_selection_is_reported_not_applied() {
        let mut state = new_state();
        let before = visible_titles(&state).join("|");
        assert!(handle_event(&mut state, parse_line("select nope")).is_err());
        assert_eq!(visible_titles(&state).join("|"), before);
    }

    #[test]
    fn default_fallback_center_is_downtown_vancouver() {
        let state = ListViewState::new(vec![], Config::default().map.fallback_center());
        assert_eq!(
            state.map_center(),
            MapPoint::from_lat_lng_deg(49.2827, -123.1207)
        );
    }
}
