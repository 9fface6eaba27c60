use pokeapi;

mod config;
mod screen;
mod sprite;
mod widget;

use crate::config::Config;
use crate::pokeapi::{Route, Session};
use crate::screen::Screen;
use crate::screen::detail;
use crate::screen::list;
use crate::widget::logo;

use iced::widget::{column, container, row, text_input};
use iced::{Center, Element, Fill, Font, Subscription, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .title(Pokedex::title)
        .subscription(Pokedex::subscription)
        .theme(Pokedex::theme)
        .default_font(Font::MONOSPACE)
        .window_size((720.0, 950.0))
        .run()
}

struct Pokedex {
    config: Config,
    session: Session,
    list: screen::List,
    detail: screen::Detail,
    screen: Screen,
    location: String,
}

#[derive(Debug, Clone)]
enum Message {
    List(list::Message),
    Detail(detail::Message),
    LocationChanged(String),
    LocationSubmitted,
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        Self::with_config(Config::from_env())
    }

    fn with_config(config: Config) -> (Self, Task<Message>) {
        let session = config.session();

        let (list, load_list) = screen::List::new(config.catalog, &session);
        let route = Route::resolve(&config.location, config.catalog);

        let mut pokedex = Self {
            detail: screen::Detail::new(config.catalog),
            location: route.to_string(),
            config,
            session,
            list,
            screen: Screen::List,
        };

        let navigate = pokedex.navigate(route);

        (
            pokedex,
            Task::batch([load_list.map(Message::List), navigate]),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::List(message) => match self.list.update(message, &self.session) {
                list::Action::None => Task::none(),
                list::Action::Run(task) => task.map(Message::List),
                list::Action::Open(entry) => {
                    let id = entry.id();

                    let Some(task) = self.detail.open(entry, &self.session) else {
                        return Task::none();
                    };

                    self.screen = Screen::Detail;
                    self.location = Route::Detail(id).to_string();

                    task.map(Message::Detail)
                }
            },
            Message::Detail(message) => match self.detail.update(message, &self.session) {
                detail::Action::None => Task::none(),
                detail::Action::Run(task) => task.map(Message::Detail),
                detail::Action::Show(route, task) => {
                    self.location = route.to_string();

                    task.map(Message::Detail)
                }
                detail::Action::Back => self.navigate(Route::List),
            },
            Message::LocationChanged(location) => {
                self.location = location;

                Task::none()
            }
            Message::LocationSubmitted => {
                let route = Route::resolve(&self.location, self.config.catalog);

                self.navigate(route)
            }
        }
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        log::info!("Navigating to {route}");

        self.list.cancel();

        match route {
            Route::List => {
                self.detail.leave();
                self.screen = Screen::List;
                self.location = route.to_string();

                Task::none()
            }
            Route::Detail(id) => {
                self.screen = Screen::Detail;

                self.detail.load(id, &self.session).map(Message::Detail)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = match self.screen {
            Screen::List => self.list.view().map(Message::List),
            Screen::Detail => self.detail.view().map(Message::Detail),
        };

        let navbar = container(
            row![
                logo(14),
                text_input("index", &self.location)
                    .on_input(Message::LocationChanged)
                    .on_submit(Message::LocationSubmitted)
                    .size(12)
                    .padding([5, 10]),
            ]
            .spacing(20)
            .width(Fill)
            .align_y(Center),
        )
        .padding([5, 10])
        .style(container::dark);

        column![navbar, container(screen).height(Fill)].into()
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Detail => self
                .detail
                .title()
                .map(|name| format!("{name} - Pokédex"))
                .unwrap_or_else(|| "Pokédex".to_owned()),
            Screen::List => "Pokédex".to_owned(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self.screen {
            Screen::List => Subscription::none(),
            Screen::Detail => self.detail.subscription().map(Message::Detail),
        }
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}
