#[cfg(test)]
pub const RECORD_DATA: &str = "; Saved from the reading list
[The Rust Programming Language]
description = The book, free online
link = https://doc.rust-lang.org/book/
tags = rust, books ,learning
comment = Start here
";

#[cfg(test)]
pub const POST_TEMPLATE: &str = r##"<html><head><title>{{title}}</title>
{{{meta_tags}}}
{{{meta_video}}}
{{{meta_image}}}
</head><body>
<h1>{{title}}</h1>
<p>{{description}}</p>
{{{comment}}}
<a href="{{{link}}}">{{{link}}}</a>
<ul>
{{{tags}}}
</ul>
</body></html>
"##;

#[cfg(test)]
pub const MONTH_TEMPLATE: &str = r##"<html><body>
<h1>{{month}}</h1>
{{{posts}}}
<a href="{{previous}}">Previous month</a>
</body></html>
"##;

#[cfg(test)]
pub const TAG_TEMPLATE: &str = r##"<html><body>
<h1>{{tag}}</h1>
{{{posts}}}
</body></html>
"##;
