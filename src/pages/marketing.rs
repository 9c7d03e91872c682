use htmlescape::encode_minimal;

use super::{cta_section, PageMeta};
use crate::catalogue::{
    Brand, CaseStudy, LegalPage, Model, Sector, BRANDS, CASE_STUDIES, MODELS, RESEARCH_FOCUS,
    SECTORS,
};
use crate::contact::{compose_script, ContactDraft};

const PILLARS: &[(&str, &str)] = &[
    ("Education", "Pioneering AI for primary, secondary and higher education."),
    ("Business", "Automation and analytics that respect privacy and compliance."),
    ("Innovation", "Research and datasets advancing responsible AI."),
];

fn list_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", encode_minimal(item)))
        .collect()
}

fn case_study_card(study: &CaseStudy) -> String {
    format!(
        r#"<article class="case-study" id="{slug}">
<h3><a href="/case-studies/{slug}">{institution}</a></h3>
<p class="meta">{kind} &middot; {location}</p>
<p><strong>Challenge:</strong> {challenge}</p>
<p><strong>Solution:</strong> {solution}</p>
<ul>{results}</ul>
<blockquote>{testimonial}<cite>{contact}</cite></blockquote>
</article>"#,
        slug = study.slug,
        institution = encode_minimal(study.institution),
        kind = study.kind.label(),
        location = encode_minimal(study.location),
        challenge = encode_minimal(study.challenge),
        solution = encode_minimal(study.solution),
        results = list_items(study.results),
        testimonial = encode_minimal(study.testimonial),
        contact = encode_minimal(study.contact),
    )
}

fn sector_card(sector: &Sector) -> String {
    let details: String = sector
        .details
        .iter()
        .map(|p| format!("<p>{}</p>", encode_minimal(p)))
        .collect();
    format!(
        "<article class=\"sector\" id=\"{slug}\"><h2><a href=\"/what-we-do/{slug}\">{}</a></h2><p class=\"summary\">{}</p>{}</article>",
        encode_minimal(sector.title),
        encode_minimal(sector.summary),
        details,
        slug = sector.slug,
    )
}

fn model_card(model: &Model) -> String {
    format!(
        "<article class=\"model\" id=\"{slug}\"><h3><a href=\"/models/{slug}\">{}</a></h3><p class=\"category\">{}</p><p>{}</p><ul>{}</ul></article>",
        encode_minimal(model.name),
        model.category.label(),
        encode_minimal(model.description),
        list_items(model.features),
        slug = model.slug,
    )
}

pub fn home(site_name: &str) -> (PageMeta, String) {
    let cards: String = PILLARS
        .iter()
        .map(|(title, text)| {
            format!(
                "<article class=\"card\"><h2>{}</h2><p>{}</p></article>",
                title, text
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
<h1><strong>AI</strong> is in our <strong>DNA</strong></h1>
<p>{name} is the umbrella brand for our ventures across education, business automation and research, building privacy-first systems that respect user data and deliver real impact.</p>
<p><a class="button" href="/what-we-do">Discover More</a> <a class="button outline" href="/contact">Contact Us</a></p>
<img src="/assets/hero-dna-binary-light.svg" alt="Digital DNA representation" width="600" height="400">
</section>
<section class="cards">{cards}</section>
{cta}"#,
        name = encode_minimal(site_name),
        cards = cards,
        cta = cta_section(),
    );

    (
        PageMeta::new(
            site_name,
            "Privacy-first AI platforms, datasets and automation for education and enterprise.",
            "/",
        ),
        body,
    )
}

pub fn about(site_name: &str) -> (PageMeta, String) {
    let studies: String = CASE_STUDIES.iter().map(case_study_card).collect();

    let body = format!(
        r#"<section>
<h1>About {name}</h1>
<p>{name} was founded in Edinburgh with a simple belief: technology should empower institutions, not burden them. We build privacy-first AI platforms, curated datasets and automation tools for education, the public sector and business.</p>
</section>
<section>
<h2>Our mission &amp; values</h2>
<ul>
<li><strong>Education first.</strong> Every feature is designed with educators and learners in mind.</li>
<li><strong>Trust &amp; transparency.</strong> Clear governance, auditability and no surprises.</li>
<li><strong>Partnership.</strong> We work alongside institutions for long-term success.</li>
</ul>
</section>
<section>
<h2>Case studies</h2>
{studies}
</section>
{cta}"#,
        name = encode_minimal(site_name),
        studies = studies,
        cta = cta_section(),
    );

    (
        PageMeta::new(
            "About",
            "Founded in Edinburgh, building privacy-first AI for education and enterprise.",
            "/about",
        ),
        body,
    )
}

pub fn brands() -> (PageMeta, String) {
    let cards: String = BRANDS
        .iter()
        .map(|brand| {
            format!(
                r#"<article class="brand-card">
<img src="{logo}" alt="{name} logo" width="56" height="56">
<h2><a href="/brands/{slug}">{name}</a></h2>
<p class="tagline">{tagline}</p>
<p>{description}</p>
</article>"#,
                logo = encode_minimal(brand.logo),
                slug = brand.slug,
                name = encode_minimal(brand.name),
                tagline = encode_minimal(brand.tagline),
                description = encode_minimal(brand.description),
            )
        })
        .collect();

    let body = format!(
        "<section><h1>Our Brands</h1><p>Specialist products built on a shared, privacy-first platform.</p></section>\n<section class=\"brand-grid\">{}</section>\n{}",
        cards,
        cta_section()
    );

    (
        PageMeta::new("Brands", "The McCaigs AI family of products.", "/brands"),
        body,
    )
}

pub fn brand(brand: &Brand) -> (PageMeta, String) {
    let visit = brand
        .external_url
        .map(|url| {
            format!(
                "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit site</a> ",
                encode_minimal(url)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<section class="brand-detail">
<img src="{logo}" alt="{name} logo" width="56" height="56">
<h1>{name}</h1>
<p class="tagline">{tagline}</p>
<p>{visit}<a class="button outline" href="/contact">Get in Touch</a></p>
<p>{description}</p>
</section>
<section>
<h2>Key features</h2>
<ul class="features">{features}</ul>
</section>
{cta}"#,
        logo = encode_minimal(brand.logo),
        name = encode_minimal(brand.name),
        tagline = encode_minimal(brand.tagline),
        visit = visit,
        description = encode_minimal(brand.description),
        features = list_items(brand.features),
        cta = cta_section(),
    );

    let mut meta = PageMeta::new(
        &format!("{} - {}", brand.name, brand.tagline),
        brand.description,
        &format!("/brands/{}", brand.slug),
    );
    meta.head = format!(
        "<meta property=\"og:image\" content=\"{}\">",
        encode_minimal(brand.logo)
    );
    (meta, body)
}

pub fn what_we_do() -> (PageMeta, String) {
    let sectors: String = SECTORS.iter().map(sector_card).collect();
    let models: String = MODELS.iter().map(model_card).collect();

    let body = format!(
        r#"<section>
<h1>What We Do</h1>
<p>We design privacy-first platforms, curated datasets, and cloud services that help organisations adopt AI with confidence, from regulated sectors to fast-moving start-ups.</p>
<p>Around half of our time goes into research and development: compact AI systems, model efficiency and on-device intelligence.</p>
</section>
<section class="sectors">{sectors}</section>
<section>
<h2>Our R&amp;D Mission</h2>
<ul>{research}</ul>
</section>
<section class="models">
<h2>Platforms in use</h2>
{models}
</section>
{cta}"#,
        sectors = sectors,
        research = list_items(RESEARCH_FOCUS),
        models = models,
        cta = cta_section(),
    );

    (
        PageMeta::new(
            "What We Do",
            "Sector AI platforms, productivity suites, datasets and no-code tools.",
            "/what-we-do",
        ),
        body,
    )
}

pub fn sector(sector: &Sector) -> (PageMeta, String) {
    let body = format!(
        "<a class=\"back\" href=\"/what-we-do\">What We Do</a>\n<section class=\"sectors\">{}</section>\n{}",
        sector_card(sector),
        cta_section()
    );
    (
        PageMeta::new(sector.title, sector.summary, &format!("/what-we-do/{}", sector.slug)),
        body,
    )
}

pub fn case_study(study: &CaseStudy) -> (PageMeta, String) {
    let body = format!(
        "<a class=\"back\" href=\"/about\">About</a>\n<section>{}</section>\n{}",
        case_study_card(study),
        cta_section()
    );
    (
        PageMeta::new(
            &format!("{} case study", study.institution),
            study.challenge,
            &format!("/case-studies/{}", study.slug),
        ),
        body,
    )
}

pub fn model(model: &Model) -> (PageMeta, String) {
    let body = format!(
        "<a class=\"back\" href=\"/what-we-do\">What We Do</a>\n<section class=\"models\">{}</section>\n{}",
        model_card(model),
        cta_section()
    );
    (
        PageMeta::new(model.name, model.description, &format!("/models/{}", model.slug)),
        body,
    )
}

pub fn contact(recipient: &str) -> (PageMeta, String) {
    let fallback = ContactDraft::default().mailto_href(recipient);
    let body = format!(
        r#"<section class="contact">
<h1>Start the conversation</h1>
<p>Share a few details and we'll respond within two working days. Based in Edinburgh, Scotland, serving clients across the UK and internationally.</p>
<form id="contact-form">
<label for="name">Name</label>
<input id="name" name="name" placeholder="Your full name" required>
<label for="email">Work email</label>
<input id="email" name="email" type="email" placeholder="you@organisation.co.uk" required>
<label for="message">How can we help?</label>
<textarea id="message" name="message" rows="6" placeholder="Tell us about your project, service needs or partnership idea." required></textarea>
<button type="submit">Send message</button>
<p class="small">Sending opens a draft in your own email client. We only use your details to respond to this enquiry.</p>
</form>
<noscript><p>Or email us directly: <a href="{fallback}">{recipient}</a></p></noscript>
</section>
{script}"#,
        fallback = encode_minimal(&fallback),
        recipient = encode_minimal(recipient),
        script = compose_script(recipient),
    );

    (
        PageMeta::new("Contact", "Get in touch with the McCaigs AI team.", "/contact"),
        body,
    )
}

/// Wraps an already rendered legal document.
pub fn legal(page: &LegalPage, rendered: &str) -> (PageMeta, String) {
    let body = format!("<article class=\"legal prose\">\n{}\n</article>", rendered);
    (
        PageMeta::new(page.title, page.title, &page.path()),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{brand_by_slug, case_study_by_slug, model_by_slug, sector_by_slug};

    #[test]
    fn brand_index_links_every_brand() {
        let (_, body) = brands();
        for brand in BRANDS {
            assert!(body.contains(&format!("href=\"/brands/{}\"", brand.slug)));
        }
    }

    #[test]
    fn brand_detail_lists_features() {
        let brand = brand_by_slug("teachersai").unwrap();
        let (meta, body) = super::brand(brand);
        assert_eq!(meta.title, "TeachersAI - Planning, marking and safeguarding in one suite");
        assert!(body.contains("<li>Rubric-based marking and moderation</li>"));
        assert!(!body.contains("Visit site"));
    }

    #[test]
    fn contact_page_never_posts() {
        let (_, body) = contact("info@mccaigs.ai");
        assert!(!body.contains("method=\"post\""));
        assert!(!body.contains("action="));
        assert!(body.contains("mailto:info@mccaigs.ai?subject=Website%20enquiry"));
        assert!(body.contains("encodeURIComponent"));
    }

    #[test]
    fn what_we_do_includes_catalogues() {
        let (_, body) = what_we_do();
        assert!(body.contains("id=\"data-and-no-code\""));
        assert!(body.contains("Data &amp; No-Code"));
        assert!(body.contains("Student Analytics Pro"));
    }

    #[test]
    fn about_lists_case_studies() {
        let (_, body) = about("McCaigs AI");
        assert!(body.contains("Royal High School Edinburgh"));
        assert!(body.contains("Training Centre"));
    }

    #[test]
    fn detail_pages_reuse_cards() {
        let (meta, body) = sector(sector_by_slug("productivity-and-insights").unwrap());
        assert_eq!(meta.path, "/what-we-do/productivity-and-insights");
        assert!(body.contains("Productivity &amp; Insights"));

        let (meta, body) = case_study(case_study_by_slug("university-edinburgh").unwrap());
        assert_eq!(meta.title, "University of Edinburgh case study");
        assert!(body.contains("<li>40% increase in student engagement scores</li>"));

        let (meta, body) = model(model_by_slug("smart-lms").unwrap());
        assert_eq!(meta.path, "/models/smart-lms");
        assert!(body.contains("<p class=\"category\">LMS</p>"));
    }
}
