use crate::pokeapi::pokemon::{self, Pokedex, Summary};
use crate::pokeapi::search::{self, Search};
use crate::pokeapi::{Catalog, Entry, Error, Session};
use crate::sprite::Sprite;
use crate::widget::pokeball;

use iced::widget::{
    button, center, column, container, horizontal_space, pop, radio, row, scrollable, svg, text,
    text_input,
};
use iced::{Center, Element, Fill, Task};

use function::Binary;
use std::collections::HashMap;
use std::sync::Arc;

pub struct List {
    state: State,
    search: String,
    mode: search::Mode,
    matches: Arc<[Summary]>,
    filters_open: bool,
    pending: Option<pokemon::Id>,
    sprites: HashMap<pokemon::Id, Thumbnail>,
}

enum Thumbnail {
    Loading,
    Loaded(svg::Handle),
    Errored,
}

enum State {
    Loading,
    Loaded(Pokedex),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Summary>, Error>),
    SearchChanged(String),
    ModeSelected(search::Mode),
    ToggleFilters,
    ClearSearch,
    Select(pokemon::Id),
    Prefetched(pokemon::Id, Result<Entry, Error>),
    RowShown(pokemon::Id),
    SpriteFetched(pokemon::Id, Result<Sprite, anywho::Error>),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Open(Entry),
}

impl List {
    pub fn new(catalog: Catalog, session: &Session) -> (Self, Task<Message>) {
        let session = session.clone();

        (
            Self {
                state: State::Loading,
                search: String::new(),
                mode: search::Mode::default(),
                matches: Arc::from([]),
                filters_open: false,
                pending: None,
                sprites: HashMap::new(),
            },
            Task::perform(
                async move { session.list(catalog.size()).await },
                Message::Loaded,
            ),
        )
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::Loaded(Ok(summaries)) => {
                let pokedex = Pokedex::new(summaries, |summary| summary.id);

                log::info!("Listed {} Pokémon", pokedex.len());

                self.state = State::Loaded(pokedex);
                self.filter();

                Action::None
            }
            Message::Loaded(Err(error)) => {
                log::error!("Failed to list Pokémon: {error}");

                self.state = State::Errored;

                Action::None
            }
            Message::SearchChanged(search) => {
                self.search = search;
                self.filter();

                Action::None
            }
            Message::ModeSelected(mode) => {
                self.mode = mode;
                self.filter();

                Action::None
            }
            Message::ToggleFilters => {
                self.filters_open = !self.filters_open;

                Action::None
            }
            Message::ClearSearch => {
                self.search.clear();
                self.filter();

                Action::None
            }
            Message::Select(id) => {
                let State::Loaded(pokedex) = &self.state else {
                    return Action::None;
                };

                let Some(summary) = pokedex.get(&id) else {
                    log::warn!("Pokémon {id} is not in the Pokédex");
                    return Action::None;
                };

                if self.pending == Some(id) {
                    return Action::None;
                }

                log::info!("Opening {}", summary.display_name());
                self.pending = Some(id);

                Action::Run(Task::perform(
                    Entry::fetch(id, session),
                    Message::Prefetched.with(id),
                ))
            }
            Message::Prefetched(id, result) => {
                if self.pending != Some(id) {
                    return Action::None;
                }

                self.pending = None;

                match result {
                    Ok(entry) => Action::Open(entry),
                    Err(error) => {
                        log::error!("Failed to fetch Pokémon {id}: {error}");

                        Action::None
                    }
                }
            }
            Message::RowShown(id) => {
                let State::Loaded(pokedex) = &self.state else {
                    return Action::None;
                };

                if !pokedex.contains_key(&id) || self.sprites.contains_key(&id) {
                    return Action::None;
                }

                let _ = self.sprites.insert(id, Thumbnail::Loading);

                Action::Run(Task::perform(
                    Sprite::fetch(id, session),
                    Message::SpriteFetched.with(id),
                ))
            }
            Message::SpriteFetched(id, Ok(sprite)) => {
                let _ = self.sprites.insert(
                    id,
                    Thumbnail::Loaded(svg::Handle::from_memory(sprite.bytes.to_vec())),
                );

                Action::None
            }
            Message::SpriteFetched(id, Err(error)) => {
                log::warn!("Failed to fetch sprite of Pokémon {id}: {error}");

                let _ = self.sprites.insert(id, Thumbnail::Errored);

                Action::None
            }
        }
    }

    /// Forgets the entry being opened, if any, so it no longer opens once
    /// fetched.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_sprite(&self, id: pokemon::Id) -> bool {
        matches!(self.sprites.get(&id), Some(Thumbnail::Loaded(_)))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn matches(&self) -> &[Summary] {
        &self.matches
    }

    /// Whether the Pokédex is loaded and nothing in it matches the search.
    pub fn is_not_found(&self) -> bool {
        matches!(self.state, State::Loaded(_)) && self.matches.is_empty()
    }

    fn filter(&mut self) {
        let State::Loaded(pokedex) = &self.state else {
            return;
        };

        self.matches = Search::new(pokedex, &self.search, self.mode).matches;
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search = {
            let input = text_input("Search by name or number", &self.search)
                .on_input(Message::SearchChanged)
                .padding(10);

            let clear = (!self.search.is_empty()).then(|| {
                button(text("×").size(20))
                    .on_press(Message::ClearSearch)
                    .style(button::text)
            });

            let sort = button(text(match self.mode {
                search::Mode::Number => "#",
                search::Mode::Name => "A",
            }))
            .on_press(Message::ToggleFilters)
            .padding([10, 15])
            .style(if self.filters_open {
                button::primary
            } else {
                button::secondary
            });

            row![input]
                .push_maybe(clear)
                .push(sort)
                .spacing(10)
                .align_y(Center)
        };

        let filters = self.filters_open.then(|| {
            container(
                row![
                    text("Sort by:").size(14),
                    row(search::Mode::ALL.map(|mode| {
                        radio(mode.to_string(), mode, Some(self.mode), Message::ModeSelected)
                            .size(14)
                            .text_size(14)
                            .into()
                    }))
                    .spacing(20)
                ]
                .spacing(20)
                .align_y(Center),
            )
            .padding(10)
            .width(Fill)
            .style(container::bordered_box)
        });

        let content: Element<_> = match &self.state {
            State::Loading => center(pokeball(40, None)).into(),
            State::Errored => center(text("The Pokédex could not be loaded :(")).into(),
            State::Loaded(_) if self.matches.is_empty() => center(
                container(text!("Pokémon not found: \"{}\"", self.search))
                    .padding(20)
                    .style(container::bordered_box),
            )
            .into(),
            State::Loaded(_) => scrollable(
                column(
                    self.matches
                        .iter()
                        .map(|summary| {
                            item(
                                summary,
                                self.sprites.get(&summary.id),
                                self.pending == Some(summary.id),
                            )
                        }),
                )
                .spacing(5)
                .padding([0, 10]),
            )
            .width(Fill)
            .height(Fill)
            .into(),
        };

        column![search]
            .push_maybe(filters)
            .push(content)
            .spacing(10)
            .padding(10)
            .into()
    }
}

fn item<'a>(
    summary: &'a Summary,
    thumbnail: Option<&'a Thumbnail>,
    is_pending: bool,
) -> Element<'a, Message> {
    let artwork: Element<_> = if let Some(Thumbnail::Loaded(handle)) = thumbnail {
        svg(handle.clone()).width(40).height(40).into()
    } else {
        let id = summary.id;

        pop(pokeball(40, None))
            .key(summary.name.as_str())
            .on_show(move |_size| Message::RowShown(id))
            .into()
    };

    let content = row![
        text(summary.id.number()).size(14).width(60),
        artwork,
        text(summary.display_name()).size(16),
        horizontal_space(),
    ]
    .push_maybe(is_pending.then(|| pokeball(16, None)))
    .spacing(10)
    .align_y(Center);

    button(
        container(content)
            .padding(10)
            .width(Fill)
            .style(container::bordered_box),
    )
    .on_press(Message::Select(summary.id))
    .padding(0)
    .style(button::text)
    .width(Fill)
    .into()
}
