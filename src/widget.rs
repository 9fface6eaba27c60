use crate::pokeapi::color::{self, Translucent};

use iced::border;
use iced::mouse;
use iced::widget::{canvas, container, row, text};
use iced::{Center, Color, Element, Pixels, Point, Radians, Rectangle, Renderer, Size, Theme};
use std::f32::consts::PI;

pub fn logo<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    let size = size.into();

    row![pokeball(size, None), text("Pokédex").size(size)]
        .spacing(size.0 / 2.0)
        .align_y(Center)
        .into()
}

/// A Poké Ball whose upper shell takes the given color, or the danger color of
/// the theme.
pub fn pokeball<'a, Message: 'a>(
    size: impl Into<Pixels>,
    shell: Option<Color>,
) -> Element<'a, Message> {
    let size = size.into();

    canvas(Pokeball { shell })
        .width(size)
        .height(size)
        .into()
}

struct Pokeball {
    shell: Option<Color>,
}

impl Pokeball {
    fn shell(&self, theme: &Theme) -> Color {
        self.shell.unwrap_or(theme.palette().danger)
    }
}

impl<Message> canvas::Program<Message> for Pokeball {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        const RADIUS: f32 = 100.0;
        const BAND: f32 = 24.0;

        let palette = theme.palette();
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = Point::new(RADIUS, RADIUS);
        let shell = canvas::Path::new(|path| {
            path.arc(canvas::path::Arc {
                center,
                radius: RADIUS,
                start_angle: Radians(PI),
                end_angle: Radians(2.0 * PI),
            });
            path.close();
        });
        let band = Rectangle::new(
            Point::new(0.0, RADIUS - BAND / 2.0),
            Size::new(2.0 * RADIUS, BAND),
        );

        frame.scale((bounds.width - 0.5) / (2.0 * RADIUS));

        frame.fill(&canvas::Path::circle(center, RADIUS), palette.text);
        frame.fill(&shell, self.shell(theme));
        frame.fill_rectangle(band.position(), band.size(), palette.background);
        frame.fill(
            &canvas::Path::circle(center, RADIUS * 0.4),
            palette.background,
        );
        frame.fill(&canvas::Path::circle(center, RADIUS * 0.22), palette.text);

        vec![frame.into_geometry()]
    }
}

/// A rounded label filled with the given color, like the type badges of the
/// Pokédex.
pub fn badge<'a, Message: 'a>(label: String, fill: Option<Color>) -> Element<'a, Message> {
    container(text(label).size(12).color(Color::WHITE))
        .padding([4, 12])
        .style(move |theme: &Theme| {
            let fill = fill.unwrap_or(theme.extended_palette().secondary.strong.color);

            container::Style::default()
                .background(fill)
                .border(border::rounded(12))
        })
        .into()
}

pub fn solid(color: color::Color) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

pub fn translucent(translucent: Translucent) -> Color {
    let Translucent { color, alpha } = translucent;

    Color::from_rgba8(color.r, color.g, color.b, alpha)
}
