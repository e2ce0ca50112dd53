//! Ready-made tag sets.
//!
//! Presets are plain [`RenderConfig`] values; turn one into a renderer with
//! `MarkupRenderer::from(presets::html())`, or tweak it first through
//! [`MarkupRenderer::to_builder`](crate::render::MarkupRenderer::to_builder).
use crate::tags::AddRemTags;
use crate::tags::MarkupTag;
use crate::tags::RenderConfig;

/// Pango/Tango `<span>` markup, as understood by GTK-style rich text labels.
pub fn tango() -> RenderConfig {
    RenderConfig {
        file: MarkupTag::default(),
        normal: MarkupTag::new(r#"<span weight="dim">"#, "</span>"),
        comment: MarkupTag::new(r#"<span style="italic" weight="dim">"#, "</span>"),
        line: AddRemTags {
            add: MarkupTag::new(
                r##"<span foreground="#ffffff" background="#007700">"##,
                "</span>",
            ),
            rem: MarkupTag::new(
                r##"<span foreground="#eeeeee" background="#770000">"##,
                "</span>",
            ),
        },
        text: AddRemTags {
            add: MarkupTag::new(r##"<span background="#004400" weight="bold">"##, "</span>"),
            rem: MarkupTag::new(
                r##"<span background="#440000" weight="dim" strikethrough="true">"##,
                "</span>",
            ),
        },
    }
}

/// An unstyled `<ul>` with one `<li>` per line, for browser display.
pub fn html() -> RenderConfig {
    RenderConfig {
        file: MarkupTag::new(
            "<ul style=\"list-style-type:none;margin:0;padding:0;\">\n",
            "</ul>",
        ),
        normal: MarkupTag::new(r#"<li style="opacity:0.77;">"#, "</li>"),
        comment: MarkupTag::new(r#"<li style="font-style:italic;opacity:0.77;">"#, "</li>"),
        line: AddRemTags {
            add: MarkupTag::new(
                r##"<li style="color:#ffffff;background-color:#007700;">"##,
                "</li>",
            ),
            rem: MarkupTag::new(
                r##"<li style="color:#eeeeee;background-color:#770000;">"##,
                "</li>",
            ),
        },
        text: AddRemTags {
            add: MarkupTag::new(
                r##"<span style="background-color:#004400;font-weight:bold;">"##,
                "</span>",
            ),
            rem: MarkupTag::new(
                r##"<span style="background-color:#440000;opacity:0.77;text-decoration:line-through;">"##,
                "</span>",
            ),
        },
    }
}

/// Square-bracket style tags (`[style]...[/]`) for terminal rich-text widgets.
pub fn bracket() -> RenderConfig {
    RenderConfig {
        file: MarkupTag::default(),
        normal: MarkupTag::new("[dim]", "[/]"),
        comment: MarkupTag::new("[italic dim]", "[/]"),
        line: AddRemTags {
            add: MarkupTag::new("[#ffffff on #007700]", "[/]"),
            rem: MarkupTag::new("[#eeeeee on #770000]", "[/]"),
        },
        text: AddRemTags {
            add: MarkupTag::new("[bold on #004400]", "[/]"),
            rem: MarkupTag::new("[dim strike on #440000]", "[/]"),
        },
    }
}
