//! Page sections.
//!
//! Each section writes straight into the output buffer. Content is always
//! rendered in its final state (full text, final counter values, full bar
//! widths); the browser binding hides and replays it on mount, so a page
//! viewed without scripts or printed shows everything.

use std::fmt::Write;

use folio_core::Profile;

use crate::error::RenderResult;
use crate::html::{escape_attr, escape_text, motion_attr, safe_href};
use crate::motion::MotionTuning;

/// Navigation entries, in page order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("contact", "Contact"),
];

/// Sticky header with in-page navigation and the reading-progress bar.
pub fn header(out: &mut String, profile: &Profile) {
    out.push_str("<div class=\"scroll-progress\" data-scroll-progress></div>");
    let _ = write!(
        out,
        "<header class=\"site-header\" data-site-header><a class=\"brand\" href=\"#hero\">{}</a><nav>",
        escape_text(&profile.initials()),
    );
    for (id, label) in NAV_SECTIONS {
        let _ = write!(out, "<a href=\"#{id}\">{label}</a>");
    }
    out.push_str("</nav></header>");
}

/// Hero: name, headline, typed tagline, roles.
///
/// # Errors
///
/// Returns an error if an animation descriptor cannot be encoded.
pub fn hero(out: &mut String, profile: &Profile, motion: &MotionTuning) -> RenderResult<()> {
    let _ = write!(
        out,
        "<section id=\"hero\" class=\"hero\"><div class=\"hero-backdrop\" aria-hidden=\"true\"{}></div>",
        motion_attr(motion.parallax().as_ref())?,
    );
    let _ = write!(
        out,
        "<div class=\"monogram\" aria-hidden=\"true\">{}</div>",
        escape_text(&profile.initials()),
    );
    let _ = write!(
        out,
        "<h1{}>{}</h1>",
        motion_attr(motion.reveal().as_ref())?,
        escape_text(&profile.name),
    );
    let _ = write!(
        out,
        "<p class=\"headline\"{}>{}</p>",
        motion_attr(motion.reveal_item(1).as_ref())?,
        escape_text(&profile.headline),
    );
    let _ = write!(
        out,
        "<p class=\"tagline\"><span class=\"typed\" aria-label=\"{}\"{}>{}</span><span class=\"caret\" aria-hidden=\"true\">|</span></p>",
        escape_attr(&profile.tagline),
        motion_attr(motion.typewriter(&profile.tagline).as_ref())?,
        escape_text(&profile.tagline),
    );
    if !profile.roles.is_empty() {
        out.push_str("<ul class=\"roles\">");
        for (index, role) in profile.roles.iter().enumerate() {
            let _ = write!(
                out,
                "<li{}>{}</li>",
                motion_attr(motion.reveal_item(index + 2).as_ref())?,
                escape_text(role),
            );
        }
        out.push_str("</ul>");
    }
    out.push_str("</section>");
    Ok(())
}

/// About: paragraphs plus counted-up stats.
///
/// # Errors
///
/// Returns an error if an animation descriptor cannot be encoded.
pub fn about(out: &mut String, profile: &Profile, motion: &MotionTuning) -> RenderResult<()> {
    section_open(out, "about", "About", motion)?;
    for (index, paragraph) in profile.about.iter().enumerate() {
        let _ = write!(
            out,
            "<p{}>{}</p>",
            motion_attr(motion.reveal_item(index).as_ref())?,
            escape_text(paragraph),
        );
    }
    if !profile.stats.is_empty() {
        out.push_str("<div class=\"stats\">");
        for stat in &profile.stats {
            let _ = write!(
                out,
                "<div class=\"stat\"><span class=\"stat-value\"{}>{}</span><span class=\"stat-suffix\">{}</span><span class=\"stat-label\">{}</span></div>",
                motion_attr(motion.counter(stat.value).as_ref())?,
                stat.value,
                escape_text(&stat.suffix),
                escape_text(&stat.label),
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    Ok(())
}

/// Skills: grouped rating bars.
///
/// # Errors
///
/// Returns an error if an animation descriptor cannot be encoded.
pub fn skills(out: &mut String, profile: &Profile, motion: &MotionTuning) -> RenderResult<()> {
    section_open(out, "skills", "Skills", motion)?;
    out.push_str("<div class=\"skill-groups\">");
    for (group_index, group) in profile.skills.iter().enumerate() {
        let _ = write!(
            out,
            "<div class=\"skill-group\"{}><h3>{}</h3><ul>",
            motion_attr(motion.reveal_item(group_index).as_ref())?,
            escape_text(&group.name),
        );
        for (index, skill) in group.skills.iter().enumerate() {
            let level = skill.level.min(100);
            let _ = write!(
                out,
                "<li class=\"skill\"><span class=\"skill-name\">{}</span><span class=\"skill-level\">{level}%</span><div class=\"meter\" role=\"meter\" aria-valuemin=\"0\" aria-valuemax=\"100\" aria-valuenow=\"{level}\"><div class=\"meter-fill\" style=\"width:{level}%;--level:{level}%\"{}></div></div></li>",
                escape_text(&skill.name),
                motion_attr(motion.meter(level, index).as_ref())?,
            );
        }
        out.push_str("</ul></div>");
    }
    out.push_str("</div></section>");
    Ok(())
}

/// Experience: timeline of jobs.
///
/// # Errors
///
/// Returns an error if an animation descriptor cannot be encoded.
pub fn experience(out: &mut String, profile: &Profile, motion: &MotionTuning) -> RenderResult<()> {
    section_open(out, "experience", "Experience", motion)?;
    out.push_str("<ol class=\"timeline\">");
    for (index, job) in profile.experience.iter().enumerate() {
        let _ = write!(
            out,
            "<li class=\"timeline-item\"{}><div class=\"timeline-meta\"><span class=\"period\">{}</span><span class=\"location\">{}</span></div><h3>{} <span class=\"company\">@ {}</span></h3>",
            motion_attr(motion.reveal_item(index).as_ref())?,
            escape_text(&job.period),
            escape_text(&job.location),
            escape_text(&job.role),
            escape_text(&job.company),
        );
        if !job.highlights.is_empty() {
            out.push_str("<ul class=\"highlights\">");
            for highlight in &job.highlights {
                let _ = write!(out, "<li>{}</li>", escape_text(highlight));
            }
            out.push_str("</ul>");
        }
        out.push_str("</li>");
    }
    out.push_str("</ol></section>");
    Ok(())
}

/// Education: degrees and certificates.
///
/// # Errors
///
/// Returns an error if an animation descriptor cannot be encoded.
pub fn education(out: &mut String, profile: &Profile, motion: &MotionTuning) -> RenderResult<()> {
    section_open(out, "education", "Education", motion)?;
    out.push_str("<div class=\"education\">");
    for (index, entry) in profile.education.iter().enumerate() {
        let _ = write!(
            out,
            "<article class=\"degree\"{}><h3>{}</h3><p class=\"institution\">{}</p><p class=\"period\">{}</p>",
            motion_attr(motion.reveal_item(index).as_ref())?,
            escape_text(&entry.degree),
            escape_text(&entry.institution),
            escape_text(&entry.period),
        );
        for detail in &entry.details {
            let _ = write!(out, "<p class=\"detail\">{}</p>", escape_text(detail));
        }
        out.push_str("</article>");
    }
    out.push_str("</div></section>");
    Ok(())
}

/// Contact: email, phone, location, external links.
///
/// # Errors
///
/// Returns an error if an animation descriptor cannot be encoded.
pub fn contact(out: &mut String, profile: &Profile, motion: &MotionTuning) -> RenderResult<()> {
    let contact = &profile.contact;
    section_open(out, "contact", "Contact", motion)?;
    let _ = write!(
        out,
        "<ul class=\"contact-list\"{}>",
        motion_attr(motion.reveal_item(1).as_ref())?,
    );
    let _ = write!(
        out,
        "<li><a href=\"{}\">{}</a></li>",
        safe_href(&format!("mailto:{}", contact.email)),
        escape_text(&contact.email),
    );
    if let Some(phone) = &contact.phone {
        let dial: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        let _ = write!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            safe_href(&format!("tel:{dial}")),
            escape_text(phone),
        );
    }
    let _ = write!(out, "<li>{}</li>", escape_text(&contact.location));
    for link in &contact.links {
        let _ = write!(
            out,
            "<li><a href=\"{}\" rel=\"noopener\">{}</a></li>",
            safe_href(&link.url),
            escape_text(&link.label),
        );
    }
    out.push_str("</ul></section>");
    Ok(())
}

/// Footer line.
pub fn footer(out: &mut String, profile: &Profile) {
    let _ = write!(
        out,
        "<footer class=\"site-footer\"><p>&copy; {}</p></footer>",
        escape_text(&profile.name),
    );
}

fn section_open(out: &mut String, id: &str, title: &str, motion: &MotionTuning) -> RenderResult<()> {
    let _ = write!(
        out,
        "<section id=\"{id}\" class=\"section\"><h2{}>{}</h2>",
        motion_attr(motion.reveal().as_ref())?,
        escape_text(title),
    );
    Ok(())
}
