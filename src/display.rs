use anyhow::Result;
use image::RgbImage;

/// Show `image` in a window and block until a key is pressed or the window is closed
#[cfg(feature = "gui")]
pub fn show(frame: &RgbImage, title: &str) -> Result<()> {
    use self::window::ImageWindow;

    let rgba = image::DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
    let (width, height) = rgba.dimensions();
    let handle = iced::widget::image::Handle::from_rgba(width, height, rgba.into_raw());
    let title = title.to_string();

    iced::application(
        move || ImageWindow::new(handle.clone()),
        ImageWindow::update,
        ImageWindow::view,
    )
    .title(move |_state: &ImageWindow| title.clone())
    .subscription(ImageWindow::subscription)
    .window_size((width as f32, height as f32))
    .run()
    .map_err(|e| anyhow::anyhow!("Display window failed: {}", e))
}

#[cfg(not(feature = "gui"))]
pub fn show(_frame: &RgbImage, title: &str) -> Result<()> {
    log::warn!("Built without the gui feature, not showing '{}'", title);
    Ok(())
}

#[cfg(feature = "gui")]
mod window {
    use iced::widget::{container, image as iced_image};
    use iced::{Element, Event, Length, Subscription, Task, event, keyboard};

    #[derive(Debug, Clone)]
    pub enum Message {
        KeyPressed,
    }

    pub struct ImageWindow {
        handle: iced_image::Handle,
    }

    impl ImageWindow {
        pub fn new(handle: iced_image::Handle) -> (Self, Task<Message>) {
            (Self { handle }, Task::none())
        }

        pub fn update(&mut self, message: Message) -> Task<Message> {
            match message {
                Message::KeyPressed => iced::exit(),
            }
        }

        pub fn view(&self) -> Element<'_, Message> {
            container(iced_image(self.handle.clone()))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        }

        pub fn subscription(&self) -> Subscription<Message> {
            event::listen_with(on_event)
        }
    }

    fn on_event(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<Message> {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(Message::KeyPressed),
            _ => None,
        }
    }
}
