use crate::pokeapi::color::{self, Accent};
use crate::pokeapi::navigation::Request;
use crate::pokeapi::pokemon::{self, Pokemon};
use crate::pokeapi::{Catalog, Entry, Error, Navigator, Route, Session, Stat};
use crate::sprite::Sprite;
use crate::widget::{self, badge, pokeball};

use iced::border;
use iced::keyboard;
use iced::widget::{
    button, center, center_x, column, container, horizontal_space, progress_bar, row, scrollable,
    svg, text,
};
use iced::{Center, Color, Element, Fill, Subscription, Task, Theme};

use function::Binary;

pub struct Detail {
    navigator: Navigator,
    state: State,
    accent: Accent,
    sprite: Option<(pokemon::Id, svg::Handle)>,
}

enum State {
    Idle,
    Loading(pokemon::Id),
    Loaded(Entry),
    Errored(pokemon::Id),
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Back,
    Loaded(Request, Result<Entry, Error>),
    SpriteFetched(pokemon::Id, Result<Sprite, anywho::Error>),
}

pub enum Action {
    None,
    Run(Task<Message>),
    /// A new entry is on display.
    Show(Route, Task<Message>),
    Back,
}

impl Detail {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            navigator: Navigator::new(catalog),
            state: State::Idle,
            accent: Accent::default(),
            sprite: None,
        }
    }

    /// Starts loading the entry with the given id.
    ///
    /// Whatever is on display stays there until the entry arrives.
    pub fn load(&mut self, id: pokemon::Id, session: &Session) -> Task<Message> {
        let Some(request) = self.navigator.request(id) else {
            return Task::none();
        };

        if !matches!(self.state, State::Loaded(_)) {
            self.state = State::Loading(id);
        }

        log::info!("Loading Pokémon {id}");

        Task::perform(Entry::fetch(id, session), Message::Loaded.with(request))
    }

    /// Shows an entry that was already fetched.
    ///
    /// Returns `None` if the entry is out of the catalog.
    pub fn open(&mut self, entry: Entry, session: &Session) -> Option<Task<Message>> {
        self.navigator.request(entry.id())?;

        Some(self.show(entry, session))
    }

    /// Turns any pending load stale.
    pub fn leave(&mut self) {
        self.navigator.reset();
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::Previous => match self.previous() {
                Some(id) => Action::Run(self.load(id, session)),
                None => Action::None,
            },
            Message::Next => match self.next() {
                Some(id) => Action::Run(self.load(id, session)),
                None => Action::None,
            },
            Message::Back => Action::Back,
            Message::Loaded(request, Ok(entry)) => {
                if !self.navigator.is_current(request) {
                    log::debug!("Discarding stale Pokémon {}", request.id());

                    return Action::None;
                }

                let task = self.show(entry, session);

                Action::Show(Route::Detail(request.id()), task)
            }
            Message::Loaded(request, Err(error)) => {
                log::error!("Failed to load Pokémon {}: {error}", request.id());

                if self.navigator.is_current(request) && !matches!(self.state, State::Loaded(_)) {
                    self.state = State::Errored(request.id());
                }

                Action::None
            }
            Message::SpriteFetched(id, Ok(sprite)) => {
                if self.shown().map(Entry::id) == Some(id) {
                    self.sprite = Some((id, svg::Handle::from_memory(sprite.bytes.to_vec())));
                }

                Action::None
            }
            Message::SpriteFetched(id, Err(error)) => {
                log::warn!("Failed to fetch sprite of Pokémon {id}: {error}");

                Action::None
            }
        }
    }

    fn show(&mut self, entry: Entry, session: &Session) -> Task<Message> {
        let id = entry.id();

        let _ = self.accent.apply(entry.pokemon.primary_type());
        self.state = State::Loaded(entry);

        if self.sprite.as_ref().is_some_and(|(sprite, _)| *sprite == id) {
            return Task::none();
        }

        self.sprite = None;

        Task::perform(Sprite::fetch(id, session), Message::SpriteFetched.with(id))
    }

    pub fn shown(&self) -> Option<&Entry> {
        match &self.state {
            State::Loaded(entry) => Some(entry),
            State::Idle | State::Loading(_) | State::Errored(_) => None,
        }
    }

    pub fn previous(&self) -> Option<pokemon::Id> {
        let id = self.shown()?.id();

        self.navigator.catalog().previous(id)
    }

    pub fn next(&self) -> Option<pokemon::Id> {
        let id = self.shown()?.id();

        self.navigator.catalog().next(id)
    }

    /// The request whose entry is awaited or on display, if any.
    pub fn request(&self) -> Option<Request> {
        self.navigator.current()
    }

    /// The label and fill of every type badge of the given Pokémon.
    ///
    /// All of them take the accent, which follows the primary type.
    fn badges(&self, pokemon: &Pokemon) -> Vec<(String, Option<color::Color>)> {
        pokemon
            .types
            .iter()
            .map(|type_| (type_.to_string().to_uppercase(), self.accent.color()))
            .collect()
    }

    pub fn title(&self) -> Option<String> {
        self.shown().map(|entry| entry.pokemon.display_name())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let accent = self.accent.color().map(widget::solid);
        let backdrop = self.accent.backdrop().map(widget::translucent);

        let entry = match &self.state {
            State::Idle | State::Loading(_) => return center(pokeball(80, accent)).into(),
            State::Errored(id) => {
                return center(
                    column![
                        text!("Pokémon {} could not be loaded :(", id.number()),
                        button("Back to the list").on_press(Message::Back),
                    ]
                    .spacing(20)
                    .align_x(Center),
                )
                .into();
            }
            State::Loaded(entry) => entry,
        };

        let pokemon = &entry.pokemon;

        let arrow = |label: &'static str, on_press: Message| {
            button(text(label).size(20))
                .on_press(on_press)
                .padding([5, 15])
                .style(button::secondary)
        };

        let header = row![
            button(text("← List").size(14))
                .on_press(Message::Back)
                .style(button::text),
            horizontal_space(),
        ]
        .push_maybe(self.previous().map(|_| arrow("‹", Message::Previous)))
        .push_maybe(self.next().map(|_| arrow("›", Message::Next)))
        .spacing(10)
        .align_y(Center);

        let title = row![
            text(pokemon.display_name()).size(32),
            horizontal_space(),
            text(pokemon.id.number()).size(24),
        ]
        .align_y(Center);

        let sprite: Element<_> = match &self.sprite {
            Some((id, handle)) if *id == pokemon.id => {
                svg(handle.clone()).width(200).height(200).into()
            }
            _ => center(pokeball(60, accent)).width(200).height(200).into(),
        };

        let types = row(self
            .badges(pokemon)
            .into_iter()
            .map(|(label, fill)| badge(label, fill.map(widget::solid))))
        .spacing(10);

        let heading = move |label: &'static str| {
            text(label).size(18).style(move |theme: &Theme| text::Style {
                color: Some(accent.unwrap_or(theme.palette().primary)),
            })
        };

        let about = row![
            fact(pokemon.weight_label(), "Weight"),
            fact(pokemon.height_label(), "Height"),
            fact(pokemon.abilities.join("\n"), "Abilities"),
        ]
        .spacing(20);

        let stats = column(pokemon.stats.iter().map(|stat| stat_bar(stat, accent, backdrop)))
            .spacing(8);

        let card = container(
            column![
                header,
                title,
                center_x(sprite),
                center_x(types),
                heading("About"),
                about,
                text(&entry.description).size(14),
                heading("Base Stats"),
                stats,
            ]
            .spacing(20)
            .max_width(600),
        )
        .padding(20)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();

            container::Style::default()
                .background(palette.background.base.color)
                .border(
                    border::rounded(16)
                        .width(2.0)
                        .color(accent.unwrap_or(palette.background.strong.color)),
                )
        });

        container(scrollable(center_x(card).padding(20)))
            .width(Fill)
            .height(Fill)
            .style(move |theme: &Theme| {
                container::Style::default()
                    .background(accent.unwrap_or(theme.extended_palette().background.weak.color))
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            use keyboard::key::{Key, Named};

            Some(match key.as_ref() {
                Key::Named(Named::ArrowLeft) if modifiers.is_empty() => Message::Previous,
                Key::Named(Named::ArrowRight) if modifiers.is_empty() => Message::Next,
                Key::Named(Named::Escape) => Message::Back,
                _ => None?,
            })
        })
    }
}

fn fact<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    column![text(value).size(16), text(label).size(12)]
        .spacing(5)
        .width(Fill)
        .align_x(Center)
        .into()
}

fn stat_bar<'a>(
    stat: &'a Stat,
    accent: Option<Color>,
    backdrop: Option<Color>,
) -> Element<'a, Message> {
    row![
        text(stat.label())
            .size(14)
            .width(80)
            .style(move |theme: &Theme| text::Style {
                color: Some(accent.unwrap_or(theme.palette().primary)),
            }),
        text(stat.value()).size(14).width(40),
        progress_bar(Stat::SCALE, stat.progress()).style(move |theme: &Theme| {
            let palette = theme.extended_palette();

            progress_bar::Style {
                background: backdrop
                    .unwrap_or(palette.background.strong.color)
                    .into(),
                bar: accent.unwrap_or(palette.primary.base.color).into(),
                border: border::rounded(4),
            }
        }),
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::pokeapi::pokemon::Type;

    fn session() -> Session {
        Session::new("http://localhost/api/v2", "http://localhost")
    }

    fn id(n: u32) -> pokemon::Id {
        pokemon::Id::new(n).expect("valid id")
    }

    fn entry(n: u32, type_: &str) -> Entry {
        Entry {
            pokemon: Pokemon {
                id: id(n),
                name: format!("pokemon-{n}"),
                types: vec![Type::new(type_)],
                weight: 10,
                height: 10,
                abilities: vec!["overgrow".to_owned()],
                stats: vec![Stat::new("hp", 45)],
            },
            description: String::new(),
        }
    }

    fn shown(detail: &Detail) -> Option<u32> {
        detail.shown().map(|entry| entry.id().get())
    }

    fn current(detail: &Detail) -> Request {
        detail.navigator.current().expect("pending request")
    }

    #[test]
    fn shows_only_the_last_requested_entry() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.load(id(4), &session());
        let a = current(&detail);
        let _ = detail.load(id(5), &session());
        let b = current(&detail);

        assert!(matches!(
            detail.update(Message::Loaded(b, Ok(entry(5, "fire"))), &session()),
            Action::Show(Route::Detail(route), _) if route == id(5)
        ));
        assert!(matches!(
            detail.update(Message::Loaded(a, Ok(entry(4, "fire"))), &session()),
            Action::None
        ));

        assert_eq!(shown(&detail), Some(5));
    }

    #[test]
    fn stale_entry_arriving_first_is_discarded() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.load(id(4), &session());
        let a = current(&detail);
        let _ = detail.load(id(5), &session());
        let b = current(&detail);

        let _ = detail.update(Message::Loaded(a, Ok(entry(4, "fire"))), &session());
        assert_eq!(shown(&detail), None);

        let _ = detail.update(Message::Loaded(b, Ok(entry(5, "fire"))), &session());
        assert_eq!(shown(&detail), Some(5));
    }

    #[test]
    fn failed_load_keeps_previous_entry() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.open(entry(1, "grass"), &session());
        let _ = detail.load(id(2), &session());
        let request = current(&detail);

        let _ = detail.update(
            Message::Loaded(request, Err(Error::NotFound("/pokemon/2".to_owned()))),
            &session(),
        );

        assert_eq!(shown(&detail), Some(1));
    }

    #[test]
    fn failed_first_load_is_reported() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.load(id(2), &session());
        let request = current(&detail);

        let _ = detail.update(
            Message::Loaded(request, Err(Error::NotFound("/pokemon/2".to_owned()))),
            &session(),
        );

        assert!(matches!(detail.state, State::Errored(errored) if errored == id(2)));
    }

    #[test]
    fn neighbors_stop_at_catalog_bounds() {
        let catalog = Catalog::default();
        let mut detail = Detail::new(catalog);

        let _ = detail.open(entry(1, "grass"), &session());
        assert_eq!(detail.previous(), None);
        assert_eq!(detail.next(), Some(id(2)));

        let _ = detail.open(entry(catalog.size(), "psychic"), &session());
        assert_eq!(detail.previous(), Some(id(catalog.size() - 1)));
        assert_eq!(detail.next(), None);
    }

    #[test]
    fn previous_at_first_entry_does_nothing() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.open(entry(1, "grass"), &session());
        let request = current(&detail);

        assert!(matches!(
            detail.update(Message::Previous, &session()),
            Action::None
        ));
        assert!(detail.navigator.is_current(request));
    }

    #[test]
    fn next_requests_following_entry() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.open(entry(24, "poison"), &session());
        let _ = detail.update(Message::Next, &session());

        assert_eq!(current(&detail).id(), id(25));
        assert_eq!(shown(&detail), Some(24));
    }

    #[test]
    fn leaving_discards_pending_load() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.load(id(7), &session());
        let request = current(&detail);
        detail.leave();

        assert!(matches!(
            detail.update(Message::Loaded(request, Ok(entry(7, "water"))), &session()),
            Action::None
        ));
        assert_eq!(shown(&detail), None);
    }

    #[test]
    fn unknown_type_keeps_accent() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.open(entry(4, "fire"), &session());
        let fire = detail.accent.color();

        let _ = detail.open(entry(5, "shadow"), &session());

        assert!(fire.is_some());
        assert_eq!(detail.accent.color(), fire);
        assert_eq!(shown(&detail), Some(5));
    }

    #[test]
    fn every_badge_takes_the_primary_accent() {
        let mut detail = Detail::new(Catalog::default());

        let mut bulbasaur = entry(1, "grass");
        bulbasaur.pokemon.types.push(Type::new("poison"));

        let _ = detail.open(bulbasaur.clone(), &session());

        let grass = color::of("grass");
        let badges = detail.badges(&bulbasaur.pokemon);

        assert!(grass.is_some());
        assert_eq!(
            badges,
            [
                ("GRASS".to_owned(), grass),
                ("POISON".to_owned(), grass),
            ]
        );
    }

    #[test]
    fn exposes_pending_request() {
        let mut detail = Detail::new(Catalog::default());

        assert_eq!(detail.request(), None);

        let _ = detail.load(id(9), &session());

        assert_eq!(detail.request().map(Request::id), Some(id(9)));
    }

    #[test]
    fn ignores_sprite_of_other_entry() {
        let mut detail = Detail::new(Catalog::default());

        let _ = detail.open(entry(4, "fire"), &session());
        let _ = detail.update(
            Message::SpriteFetched(
                id(3),
                Ok(Sprite {
                    id: id(3),
                    bytes: bytes::Bytes::from_static(b"<svg/>"),
                }),
            ),
            &session(),
        );

        assert!(detail.sprite.is_none());
    }
}
