//! Markdown to section-structure conversion.
//!
//! Splits a raw pull-request body into sections keyed by heading text and
//! turns each top-level markdown element into a [`Block`]. This produces the
//! same JSON shape the CI pipeline hands to `prlint check`.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::collections::BTreeMap;
use std::ops::Range;

use crate::description::{Block, BlockKind, InputError, ListItem, ParsedDescription, Section};

/// Section key for a heading: whitespace runs become `_`.
pub fn section_key(heading: &str) -> String {
    heading.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Convert markdown into sections keyed by [`section_key`].
///
/// Content before the first heading is dropped. A repeated heading replaces
/// the earlier section with the same key.
pub fn to_sections(markdown: &str) -> BTreeMap<String, Section> {
    let mut builder = SectionBuilder::new(markdown);
    let parser = Parser::new_ext(markdown, Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES);

    for (event, range) in parser.into_offset_iter() {
        builder.handle_event(event, range);
    }

    builder.finish()
}

/// Convert markdown straight into a [`ParsedDescription`].
pub fn parse_description(markdown: &str) -> Result<ParsedDescription, InputError> {
    let value = serde_json::to_value(to_sections(markdown))
        .map_err(|e| InputError::MalformedInput(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| InputError::MalformedInput(e.to_string()))
}

struct SectionBuilder<'a> {
    source: &'a str,
    sections: BTreeMap<String, Section>,
    current_key: Option<String>,
    current_blocks: Vec<Block>,
    depth: usize,
    in_heading: bool,
    heading_text: String,
    list: Option<Block>,
    marker_pending: bool,
}

impl<'a> SectionBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            sections: BTreeMap::new(),
            current_key: None,
            current_blocks: Vec::new(),
            depth: 0,
            in_heading: false,
            heading_text: String::new(),
            list: None,
            marker_pending: false,
        }
    }

    fn raw(&self, range: Range<usize>) -> String {
        self.source
            .get(range)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    fn handle_event(&mut self, event: Event, range: Range<usize>) {
        // A task marker is only honored as the first event of a top-level item,
        // possibly wrapped in the item's first paragraph.
        let marker_pending = std::mem::take(&mut self.marker_pending);

        match event {
            Event::Start(tag) => {
                if marker_pending && matches!(tag, Tag::Paragraph) {
                    self.marker_pending = true;
                }
                self.handle_start(tag, range);
                self.depth += 1;
            }
            Event::End(tag_end) => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.handle_top_level_end(tag_end);
                }
            }
            Event::Text(text) | Event::Code(text) if self.in_heading => {
                self.heading_text.push_str(&text);
            }
            Event::TaskListMarker(checked) if marker_pending => {
                if let Some(item) = self
                    .list
                    .as_mut()
                    .and_then(|list| list.items.as_mut())
                    .and_then(|items| items.last_mut())
                {
                    item.checked = checked;
                }
            }
            Event::Rule if self.depth == 0 => {
                self.push_block(Block {
                    kind: BlockKind::Rule,
                    raw: self.raw(range),
                    items: None,
                });
            }
            _ => {}
        }
    }

    fn handle_start(&mut self, tag: Tag, range: Range<usize>) {
        if self.depth == 1 {
            if let (Tag::Item, Some(list)) = (&tag, self.list.as_mut()) {
                let raw = self
                    .source
                    .get(range)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default();
                list.items.get_or_insert_with(Vec::new).push(ListItem {
                    checked: false,
                    raw: Some(raw),
                });
                self.marker_pending = true;
            }
            return;
        }

        if self.depth != 0 {
            return;
        }

        let kind = match tag {
            Tag::Heading { .. } => {
                self.in_heading = true;
                self.heading_text.clear();
                return;
            }
            Tag::List(_) => {
                self.list = Some(Block::list(self.raw(range), Vec::new()));
                return;
            }
            Tag::Paragraph => BlockKind::Text,
            Tag::CodeBlock(_) => BlockKind::Code,
            Tag::BlockQuote => BlockKind::Quote,
            Tag::HtmlBlock => BlockKind::Html,
            Tag::Table(_) => BlockKind::Table,
            _ => BlockKind::Other,
        };

        self.push_block(Block {
            kind,
            raw: self.raw(range),
            items: None,
        });
    }

    fn handle_top_level_end(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::Heading(_) => {
                self.in_heading = false;
                self.close_section();
                self.current_key = Some(section_key(&self.heading_text));
            }
            TagEnd::List(_) => {
                if let Some(list) = self.list.take() {
                    self.push_block(list);
                }
            }
            _ => {}
        }
    }

    fn push_block(&mut self, block: Block) {
        if self.current_key.is_some() {
            self.current_blocks.push(block);
        }
    }

    fn close_section(&mut self) {
        let blocks = std::mem::take(&mut self.current_blocks);
        if let Some(key) = self.current_key.take() {
            self.sections.insert(key, Section::with_bodies(blocks));
        }
    }

    fn finish(mut self) -> BTreeMap<String, Section> {
        self.close_section();
        self.sections
    }
}
