//! Tag identities and the tag-to-rule dispatch table.
//!
//! Every element the HTML parser produces is mapped to a [`Tag`]. Known tags are looked up
//! in a fixed table; anything else becomes [`Tag::Unknown`]. [`classify`] then decides which
//! substitution [`Rule`] applies, and [`is_block`] tells the whitespace resolver which
//! elements are framed by blank lines instead of inline padding.

macro_rules! known_tags {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Identity of an HTML element.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Tag {
            $(
                #[doc = concat!("The `<", $name, ">` element.")]
                $variant,
            )+
            /// Any element name outside the known set (custom or misspelled elements).
            Unknown,
        }

        impl Tag {
            /// Look up the tag for an element name (ASCII case-insensitive).
            #[must_use]
            pub fn from_name(name: &str) -> Self {
                match name.to_ascii_lowercase().as_str() {
                    $($name => Self::$variant,)+
                    _ => Self::Unknown,
                }
            }
        }
    };
}

known_tags! {
    A => "a",
    Abbr => "abbr",
    Acronym => "acronym",
    Address => "address",
    Annotation => "annotation",
    AnnotationXml => "annotation-xml",
    Applet => "applet",
    Area => "area",
    Article => "article",
    Aside => "aside",
    Audio => "audio",
    B => "b",
    Base => "base",
    Basefont => "basefont",
    Bdi => "bdi",
    Bdo => "bdo",
    Bgsound => "bgsound",
    Big => "big",
    Blink => "blink",
    Blockquote => "blockquote",
    Body => "body",
    Br => "br",
    Button => "button",
    Canvas => "canvas",
    Caption => "caption",
    Center => "center",
    Cite => "cite",
    Code => "code",
    Col => "col",
    Colgroup => "colgroup",
    ColorProfile => "color-profile",
    Command => "command",
    Data => "data",
    Datalist => "datalist",
    Dd => "dd",
    Del => "del",
    Desc => "desc",
    Details => "details",
    Dfn => "dfn",
    Dialog => "dialog",
    Dir => "dir",
    Div => "div",
    Dl => "dl",
    Dt => "dt",
    Em => "em",
    Embed => "embed",
    Fieldset => "fieldset",
    Figcaption => "figcaption",
    Figure => "figure",
    Font => "font",
    ForeignObject => "foreignobject",
    Footer => "footer",
    Form => "form",
    Frame => "frame",
    Frameset => "frameset",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Head => "head",
    Header => "header",
    Hgroup => "hgroup",
    Hr => "hr",
    Html => "html",
    I => "i",
    Iframe => "iframe",
    Image => "image",
    Img => "img",
    Input => "input",
    Ins => "ins",
    Isindex => "isindex",
    Kbd => "kbd",
    Keygen => "keygen",
    Label => "label",
    Legend => "legend",
    Li => "li",
    Link => "link",
    Listing => "listing",
    Main => "main",
    Malignmark => "malignmark",
    Map => "map",
    Mark => "mark",
    Marquee => "marquee",
    Math => "math",
    Menu => "menu",
    Menuitem => "menuitem",
    Meta => "meta",
    Meter => "meter",
    Mglyph => "mglyph",
    Mi => "mi",
    Mn => "mn",
    Mo => "mo",
    Ms => "ms",
    Mtext => "mtext",
    Nav => "nav",
    Nobr => "nobr",
    Noembed => "noembed",
    Noframes => "noframes",
    Noscript => "noscript",
    Object => "object",
    Ol => "ol",
    Optgroup => "optgroup",
    SelectOption => "option",
    Output => "output",
    P => "p",
    Param => "param",
    Picture => "picture",
    Plaintext => "plaintext",
    Pre => "pre",
    Progress => "progress",
    Q => "q",
    Rb => "rb",
    Rp => "rp",
    Rt => "rt",
    Rtc => "rtc",
    Ruby => "ruby",
    S => "s",
    Samp => "samp",
    Script => "script",
    Search => "search",
    Section => "section",
    Select => "select",
    Slot => "slot",
    Small => "small",
    Source => "source",
    Spacer => "spacer",
    Span => "span",
    Strike => "strike",
    Strong => "strong",
    Style => "style",
    Sub => "sub",
    Summary => "summary",
    Sup => "sup",
    Svg => "svg",
    Table => "table",
    Tbody => "tbody",
    Td => "td",
    Template => "template",
    Textarea => "textarea",
    Tfoot => "tfoot",
    Th => "th",
    Thead => "thead",
    Time => "time",
    Title => "title",
    Tr => "tr",
    Track => "track",
    Tt => "tt",
    U => "u",
    Ul => "ul",
    Var => "var",
    Video => "video",
    Wbr => "wbr",
    Xmp => "xmp",
}

/// Substitution rule applied to a node by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `<br>`: hard line break.
    LineBreak,
    /// `<h1>`..`<h6>`: ATX heading of the given level.
    Heading(u8),
    /// `<hr>`: thematic break.
    HorizontalRule,
    /// `<i>`, `<em>`.
    Emphasis,
    /// `<b>`, `<strong>`.
    Strong,
    /// `<code>`, `<pre>`: indented code block or inline code span.
    Code,
    /// `<a>`.
    Link,
    /// `<img>`.
    Image,
    /// `<blockquote>`.
    Blockquote,
    /// `<li>`.
    ListItem,
    /// `<ul>`, `<ol>`.
    List,
    /// Structural containers framed by blank lines.
    Block,
    /// Unknown element re-emitted as literal markup.
    Passthrough,
    /// Text node, kept raw.
    Text,
}

/// Pick the substitution rule for an element.
///
/// `None` means the element is dropped: its markers and its content never reach the
/// output. Known tags without a rule are always dropped, while unknown tags are dropped
/// only when `strip_unknown` is set.
#[must_use]
pub const fn classify(tag: Tag, strip_unknown: bool) -> Option<Rule> {
    let rule = match tag {
        Tag::Br => Rule::LineBreak,
        Tag::H1 => Rule::Heading(1),
        Tag::H2 => Rule::Heading(2),
        Tag::H3 => Rule::Heading(3),
        Tag::H4 => Rule::Heading(4),
        Tag::H5 => Rule::Heading(5),
        Tag::H6 => Rule::Heading(6),
        Tag::Hr => Rule::HorizontalRule,
        Tag::I | Tag::Em => Rule::Emphasis,
        Tag::B | Tag::Strong => Rule::Strong,
        Tag::Code | Tag::Pre => Rule::Code,
        Tag::A => Rule::Link,
        Tag::Img => Rule::Image,
        Tag::Blockquote => Rule::Blockquote,
        Tag::Li => Rule::ListItem,
        Tag::Ul | Tag::Ol => Rule::List,
        Tag::Address
        | Tag::Article
        | Tag::Aside
        | Tag::Audio
        | Tag::Body
        | Tag::Canvas
        | Tag::Center
        | Tag::Dd
        | Tag::Dir
        | Tag::Div
        | Tag::Dl
        | Tag::Dt
        | Tag::Fieldset
        | Tag::Figcaption
        | Tag::Figure
        | Tag::Footer
        | Tag::Form
        | Tag::Frameset
        | Tag::Header
        | Tag::Hgroup
        | Tag::Html
        | Tag::Isindex
        | Tag::Menu
        | Tag::Nav
        | Tag::Noframes
        | Tag::Noscript
        | Tag::Output
        | Tag::P
        | Tag::Span
        | Tag::Section
        | Tag::Table
        | Tag::Tbody
        | Tag::Td
        | Tag::Tfoot
        | Tag::Th
        | Tag::Thead
        | Tag::Tr => Rule::Block,
        Tag::Unknown => {
            if strip_unknown {
                return None;
            }
            Rule::Passthrough
        }
        _ => return None,
    };
    Some(rule)
}

/// Whether an element is framed by blank lines rather than padded inline.
///
/// `span` takes the block-wrapper rule but is not in this set.
#[must_use]
pub const fn is_block(tag: Tag) -> bool {
    matches!(
        tag,
        Tag::Address
            | Tag::Article
            | Tag::Aside
            | Tag::Audio
            | Tag::Blockquote
            | Tag::Body
            | Tag::Canvas
            | Tag::Center
            | Tag::Dd
            | Tag::Dir
            | Tag::Div
            | Tag::Dl
            | Tag::Dt
            | Tag::Fieldset
            | Tag::Figcaption
            | Tag::Figure
            | Tag::Footer
            | Tag::Form
            | Tag::Frameset
            | Tag::H1
            | Tag::H2
            | Tag::H3
            | Tag::H4
            | Tag::H5
            | Tag::H6
            | Tag::Header
            | Tag::Hgroup
            | Tag::Hr
            | Tag::Html
            | Tag::Isindex
            | Tag::Li
            | Tag::Menu
            | Tag::Nav
            | Tag::Noframes
            | Tag::Noscript
            | Tag::Ol
            | Tag::Output
            | Tag::P
            | Tag::Pre
            | Tag::Section
            | Tag::Table
            | Tag::Tbody
            | Tag::Td
            | Tag::Tfoot
            | Tag::Th
            | Tag::Thead
            | Tag::Tr
            | Tag::Ul
    )
}
