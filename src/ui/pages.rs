/// Page templates, one per screen
use iced::font::{self, Font};
use iced::widget::{
    button, canvas, column, container, horizontal_space, row, scrollable, text, Column,
};
use iced::{Alignment, Element, Length, Task};
use iced_aw::Wrap;

use crate::screen::{DetailBody, ProjectGroup, Screen};
use crate::state::data::{
    Block, Category, ContactInfo, MediaRefs, Profile, ProjectRecord, ResearchEntry, Section, Tone,
    Writeup,
};
use crate::state::navigator::Navigation;
use crate::ui::map::CreationMap;
use crate::ui::room::SketchRoom;
use crate::ui::style::{self, Variant};
use crate::ui::media;
use crate::Message;

const PAGE_WIDTH: f32 = 1100.0;

const ITALIC: Font = Font {
    style: font::Style::Italic,
    ..Font::DEFAULT
};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Identifier of the page scrollable, used to jump back to the top
pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Snap the page back to its top
pub fn scroll_to_top<T>() -> Task<T> {
    scrollable::snap_to(scroll_id(), scrollable::RelativeOffset::START)
}

/// Render a screen
pub fn view(screen: Screen<'_>) -> Element<'_, Message> {
    let title = screen.title().to_string();

    let page: Element<'_, Message> = match screen {
        Screen::Home {
            featured,
            position,
            total,
            background,
        } => home(featured, position, total, background),
        Screen::Map { markers, media: refs } => {
            wrapper(title, None, map(CreationMap { markers }, refs))
        }
        Screen::Projects { filter, groups } => wrapper(
            title,
            Some(("← Back to Map", Navigation::GoMap)),
            projects(filter, groups),
        ),
        Screen::ProjectDetail { project, body } => wrapper(
            title,
            Some(("← Back to Works", Navigation::BackToWorks)),
            project_detail(project, body),
        ),
        Screen::About { profile, media: refs } => wrapper(title, None, about(profile, refs)),
        Screen::Research {
            entries,
            background,
        } => wrapper(title, None, research(entries, background)),
        Screen::ResearchDetail { position, entry } => wrapper(
            title,
            Some(("← Back to Research", Navigation::GoResearchList)),
            research_detail(position, entry),
        ),
        Screen::Contact { contact } => wrapper(title, None, contact_page(contact)),
    };

    scrollable(
        container(page)
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .id(scroll_id())
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn nav_button<'a>(label: &'a str, variant: Variant, event: Navigation) -> Element<'a, Message> {
    button(text(label).size(16))
        .on_press(Message::Navigate(event))
        .padding([8, 16])
        .style(style::sketchy(variant))
        .into()
}

/// Title bar with back buttons above an ink-bordered sheet
fn wrapper<'a>(
    title: String,
    back: Option<(&'a str, Navigation)>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut buttons = row![].spacing(12);
    if let Some((label, event)) = back {
        buttons = buttons.push(nav_button(label, Variant::Neutral, event));
    }
    buttons = buttons.push(nav_button("← Back Home", Variant::Accent, Navigation::GoHome));

    let header = row![text(title).size(52).font(BOLD), horizontal_space(), buttons]
        .spacing(16)
        .align_y(Alignment::Center);

    column![
        header,
        container(content)
            .padding(40)
            .width(Length::Fill)
            .style(style::sheet),
    ]
    .spacing(32)
    .max_width(PAGE_WIDTH)
    .into()
}

fn home<'a>(
    featured: &'a ProjectRecord,
    position: usize,
    total: usize,
    background: &'a str,
) -> Element<'a, Message> {
    let room = canvas(SketchRoom {
        featured,
        position,
        total,
    })
    .width(Length::Fill)
    .height(Length::Fixed(640.0));

    column![
        text("My Sketchy Studio").size(60).font(BOLD),
        text("Digital Crafting Room").size(22),
        room,
        text("Click objects in the room to explore").size(20),
        text("© 2025 Hand-Drawn Experience").size(14),
        media::credit(background),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .max_width(PAGE_WIDTH)
    .into()
}

fn map<'a>(map: CreationMap, refs: &'a MediaRefs) -> Element<'a, Message> {
    let see_all = button(text("See all the spots").size(22))
        .on_press(Message::Navigate(Navigation::GoProjects(None)))
        .padding([12, 24])
        .style(style::sketchy(Variant::Primary));

    column![
        canvas(map).width(Length::Fill).height(Length::Fixed(600.0)),
        row![media::credit(&refs.map_background), horizontal_space(), see_all]
            .align_y(Alignment::Center),
    ]
    .spacing(20)
    .into()
}

fn filter_button<'a>(
    label: &'a str,
    value: Option<Category>,
    current: Option<Category>,
) -> Element<'a, Message> {
    let variant = if value == current {
        Variant::Primary
    } else {
        Variant::Neutral
    };
    nav_button(label, variant, Navigation::FilterCategory(value))
}

fn project_card(project: &ProjectRecord) -> Element<'_, Message> {
    button(
        column![
            media::placeholder(&project.image, &project.title, 220.0),
            text(&project.title).size(24).font(BOLD),
            text("View Details →").size(17),
        ]
        .spacing(8),
    )
    .on_press(Message::Navigate(Navigation::OpenProject(project.id)))
    .padding(12)
    .width(Length::Fixed(310.0))
    .style(style::card)
    .into()
}

fn projects<'a>(filter: Option<Category>, groups: Vec<ProjectGroup<'a>>) -> Element<'a, Message> {
    let mut filters = vec![filter_button("All Spots", None, filter)];
    filters.extend(
        Category::ALL
            .into_iter()
            .map(|category| filter_button(category.short_label(), Some(category), filter)),
    );

    let sections = groups.into_iter().map(|group| {
        let cards: Vec<Element<'a, Message>> =
            group.projects.into_iter().map(project_card).collect();
        column![
            text(group.category.label()).size(32).font(BOLD),
            Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
        ]
        .spacing(20)
        .into()
    });

    column![
        Wrap::with_elements(filters).spacing(12.0).line_spacing(12.0),
        Column::with_children(sections).spacing(56),
    ]
    .spacing(40)
    .into()
}

fn project_detail<'a>(project: &'a ProjectRecord, body: DetailBody<'a>) -> Element<'a, Message> {
    let summary = row![
        container(media::placeholder(&project.image, &project.title, 320.0)).width(Length::FillPortion(1)),
        column![
            text(project.category.label()).size(30).font(BOLD),
            text(&project.description).size(22),
            container(text("A hand-crafted piece of visual storytelling.").size(19).font(ITALIC))
                .padding(20)
                .width(Length::Fill)
                .style(style::note),
        ]
        .spacing(20)
        .width(Length::FillPortion(1)),
    ]
    .spacing(40);

    let body = match body {
        DetailBody::Bespoke(writeup) => bespoke(writeup),
        DetailBody::Generic { title, description } => generic(title, description),
    };

    column![summary, body].spacing(48).into()
}

fn bespoke(writeup: &Writeup) -> Element<'_, Message> {
    let mut content = Column::new().spacing(40);
    if let Some(url) = &writeup.video {
        content = content.push(media::video(url));
    }
    for section in &writeup.sections {
        content = content.push(section_box(section));
    }
    content.into()
}

fn section_box<'a>(section: &'a Section) -> Element<'a, Message> {
    let blocks = section.blocks.iter().map(|block| -> Element<'a, Message> {
        match block {
            Block::Heading(heading) => text(heading).size(24).font(BOLD).into(),
            Block::Paragraph(paragraph) => text(paragraph).size(20).into(),
            Block::Gallery { label, count } => media::gallery(label, *count, 200.0),
        }
    });

    tinted_box(
        &section.title,
        section.tone,
        Column::with_children(blocks).spacing(14).into(),
    )
}

fn tinted_box<'a>(title: &'a str, tone: Tone, content: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(34).font(BOLD), content].spacing(20))
        .padding(32)
        .width(Length::Fill)
        .style(style::section(tone))
        .into()
}

fn generic<'a>(title: &'a str, description: &'a str) -> Element<'a, Message> {
    column![
        tinted_box(title, Tone::Plain, text(description).size(24).into()),
        tinted_box(
            "Process & Vision",
            Tone::Primary,
            text(
                "This project explores the intersection of traditional mediums and digital \
                 narratives, emphasizing the texture of the hand-drawn mark in a technical context."
            )
            .size(20)
            .into(),
        ),
        media::gallery("Selected Process Gallery", 1, 280.0),
    ]
    .spacing(40)
    .into()
}

fn about<'a>(profile: &'a Profile, refs: &'a MediaRefs) -> Element<'a, Message> {
    let bio = Column::with_children(
        profile
            .bio
            .iter()
            .map(|paragraph| text(paragraph).size(20).into()),
    )
    .spacing(14);

    let propositions = Column::with_children(profile.propositions.iter().map(|proposition| {
        column![
            text(&proposition.heading).size(24).font(BOLD),
            text(&proposition.body).size(20),
        ]
        .spacing(6)
        .into()
    }))
    .spacing(24);

    column![
        row![
            container(media::placeholder(&refs.bio_image, "Bio", 260.0)).width(Length::FillPortion(1)),
            column![text("Bio").size(36).font(BOLD), bio]
                .spacing(16)
                .width(Length::FillPortion(2)),
        ]
        .spacing(40),
        text("Artist Statement").size(42).font(BOLD),
        text(&profile.statement).size(24).font(ITALIC),
        text("Three Propositions").size(28).font(BOLD),
        propositions,
        container(text(&profile.closing).size(20))
            .padding(20)
            .width(Length::Fill)
            .style(style::note),
        media::credit(&refs.about_background),
    ]
    .spacing(28)
    .into()
}

fn research<'a>(entries: &'a [ResearchEntry], background: &'a str) -> Element<'a, Message> {
    let rows = entries.iter().enumerate().map(|(index, entry)| {
        button(
            row![
                text(format!("{}. {}", index + 1, entry.title)).size(26).font(BOLD),
                horizontal_space(),
                text("Open Entry →").size(18),
            ]
            .align_y(Alignment::Center),
        )
        .on_press(Message::Navigate(Navigation::OpenResearch(index)))
        .padding(20)
        .width(Length::Fill)
        .style(style::entry_row)
        .into()
    });

    column![
        text("Journal & Notes").size(44).font(BOLD),
        Column::with_children(rows).spacing(16),
        container(
            text("\"Connecting dots between data, narrative, and interaction design.\"")
                .size(20)
                .font(ITALIC)
        )
        .padding(24)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(style::note),
        media::credit(background),
    ]
    .spacing(28)
    .align_x(Alignment::Center)
    .into()
}

fn research_detail(position: usize, entry: &ResearchEntry) -> Element<'_, Message> {
    column![
        text(&entry.title).size(48).font(BOLD),
        text(format!("Entry {} · {}", position + 1, entry.url)).size(14),
        text("Creative research is an ongoing conversation with the self and the world.").size(24),
        container(text("\"The hand is the tool of the mind.\"").size(24).font(ITALIC))
            .padding(32)
            .width(Length::Fill)
            .style(style::note),
        text(
            "Journal entries dive deeper into the theoretical and practical foundations \
             of the projects shown here."
        )
        .size(24),
    ]
    .spacing(28)
    .max_width(760.0)
    .into()
}

fn contact_row<'a>(handle: &'a str, color: iced::Color) -> Element<'a, Message> {
    row![
        container(horizontal_space())
            .width(Length::Fixed(40.0))
            .height(Length::Fixed(40.0))
            .style(style::dot(color)),
        text(handle).size(30),
    ]
    .spacing(24)
    .align_y(Alignment::Center)
    .into()
}

fn contact_page(contact: &ContactInfo) -> Element<'_, Message> {
    column![
        text("Get in Touch").size(40).font(BOLD),
        contact_row(&contact.email, style::PRIMARY),
        contact_row(&contact.instagram, style::ACCENT),
    ]
    .spacing(32)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
