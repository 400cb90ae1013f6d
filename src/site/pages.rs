//! Page composition - every route's element tree.
//!
//! Pages are pure composition: static content records flowing into base
//! elements wrapped by reveal primitives, with the choreography (delays,
//! distances, staggering) tuned per section.

use std::rc::Rc;

use crate::content::{self, BRANDS, EDUCATION, EXPERIENCES, PERSON, PROJECTS, Project};
use crate::primitives::{BlockProps, Cleanup, PropValue, TextProps, block, rule, spacer, text};
use crate::reveal::{
    MarqueeProps, RevealProps, ScaleRevealProps, StaggerRevealProps, TextRevealProps,
    WordRevealProps, marquee_reveal, reveal, scale_reveal, stagger_reveal, text_reveal,
    word_reveal,
};
use crate::theme;
use crate::types::{Attr, Rgba};

use super::Route;
use super::contact::{self, Field, SubmitStatus};

/// Build the element tree for a route. Returns the cleanup releasing it.
pub fn build_page(route: Route) -> Cleanup {
    match route {
        Route::Home => home_page(),
        Route::About => about_page(),
        Route::Projects => projects_page(),
        Route::ProjectDetail(slug) => match content::project_by_slug(slug) {
            Some(project) => project_detail_page(project),
            None => missing_page(),
        },
        Route::Brands => brands_page(),
        Route::Contact => contact_page(),
    }
}

// =============================================================================
// SHARED PIECES
// =============================================================================

fn txt(content: &str, fg: Rgba, attrs: Attr) {
    text(TextProps {
        content: content.into(),
        fg,
        attrs,
        ..Default::default()
    });
}

fn body(content: &str) {
    txt(content, theme::FG, Attr::empty());
}

fn muted(content: &str) {
    txt(content, theme::MUTED, Attr::empty());
}

fn label(content: &str) {
    txt(content, theme::MUTED, Attr::BOLD);
}

/// Section heading with the accent rule above it.
fn section_heading(heading: &'static str, delay_ms: u32) {
    reveal(
        RevealProps {
            delay_ms,
            distance_px: Some(20.0),
            ..Default::default()
        },
        move || {
            rule(12, theme::ACCENT);
            label(heading);
        },
    );
}

fn footer() {
    spacer(3);
    reveal(RevealProps::default(), || {
        rule(24, theme::OUTLINE);
        muted(PERSON.email);
        muted(PERSON.location);
        spacer(1);
        txt(
            "↑↓ scroll · pgup/pgdn page · 1-5 pages · q quit",
            theme::OUTLINE,
            Attr::empty(),
        );
    });
    spacer(1);
}

// =============================================================================
// HOME
// =============================================================================

fn home_page() -> Cleanup {
    block(BlockProps { id: Some("page-home".into()), ..Default::default() }, || {
        spacer(2);

        scale_reveal(ScaleRevealProps { delay_ms: 100, ..Default::default() }, || {
            txt("A Z U R E", theme::OUTLINE, Attr::BOLD);
        });
        text_reveal(TextRevealProps { delay_ms: 300, ..Default::default() }, || {
            txt("M A L M", theme::ACCENT, Attr::BOLD);
        });
        spacer(1);

        reveal(
            RevealProps { delay_ms: 400, distance_px: Some(20.0), ..Default::default() },
            || {
                rule(12, theme::ACCENT);
                label(PERSON.title);
            },
        );
        spacer(1);

        word_reveal(WordRevealProps { delay_ms: 500, ..Default::default() }, PERSON.bio);
        spacer(2);

        marquee_reveal(
            MarqueeProps::default(),
            "LET'S WORK TOGETHER · AZUREM.UX@GMAIL.COM · SEATTLE, WA · ",
        );
        spacer(2);

        section_heading("SELECTED WORK", 0);
        spacer(1);

        let rows: Vec<Box<dyn FnOnce()>> = PROJECTS
            .iter()
            .enumerate()
            .map(|(i, project)| {
                Box::new(move || {
                    txt(
                        &format!("0{}  {}", i + 1, project.title),
                        theme::FG,
                        Attr::BOLD,
                    );
                    muted(&format!("    {} — {}", project.subtitle, project.role));
                    spacer(1);
                }) as Box<dyn FnOnce()>
            })
            .collect();
        stagger_reveal(
            StaggerRevealProps { stagger_delay_ms: 120, base_delay_ms: 200, ..Default::default() },
            rows,
        );

        reveal(RevealProps { distance_px: Some(30.0), ..Default::default() }, || {
            muted("press 3 to browse the full catalog →");
        });

        footer();
    })
}

// =============================================================================
// ABOUT
// =============================================================================

fn about_page() -> Cleanup {
    block(BlockProps { id: Some("page-about".into()), ..Default::default() }, || {
        spacer(2);

        text_reveal(TextRevealProps { delay_ms: 100, ..Default::default() }, || {
            txt("ABOUT", theme::ACCENT, Attr::BOLD);
        });
        spacer(1);

        word_reveal(
            WordRevealProps { delay_ms: 300, ..Default::default() },
            PERSON.bio,
        );
        spacer(2);

        for (i, paragraph) in PERSON.extended_bio.iter().enumerate() {
            reveal(
                RevealProps {
                    delay_ms: 100 * i as u32,
                    distance_px: Some(30.0),
                    ..Default::default()
                },
                move || {
                    body(paragraph);
                    spacer(1);
                },
            );
        }
        spacer(1);

        section_heading("EXPERIENCE", 0);
        spacer(1);

        let entries: Vec<Box<dyn FnOnce()>> = EXPERIENCES
            .iter()
            .map(|experience| {
                Box::new(move || {
                    txt(experience.role, theme::FG, Attr::BOLD);
                    txt(
                        &format!("{} · {}", experience.company, experience.period),
                        theme::ACCENT_SOFT,
                        Attr::empty(),
                    );
                    muted(experience.description);
                    for highlight in experience.highlights {
                        text(TextProps {
                            content: format!("· {highlight}").into(),
                            fg: theme::MUTED,
                            indent: 2,
                            ..Default::default()
                        });
                    }
                    spacer(1);
                }) as Box<dyn FnOnce()>
            })
            .collect();
        stagger_reveal(
            StaggerRevealProps { stagger_delay_ms: 150, ..Default::default() },
            entries,
        );
        spacer(1);

        section_heading("EDUCATION", 0);
        spacer(1);

        let entries: Vec<Box<dyn FnOnce()>> = EDUCATION
            .iter()
            .map(|education| {
                Box::new(move || {
                    txt(education.degree, theme::FG, Attr::BOLD);
                    muted(&format!("{} · {}", education.institution, education.period));
                    spacer(1);
                }) as Box<dyn FnOnce()>
            })
            .collect();
        stagger_reveal(StaggerRevealProps::default(), entries);
        spacer(1);

        section_heading("SKILLS", 0);
        spacer(1);

        let entries: Vec<Box<dyn FnOnce()>> = content::SKILL_CATEGORIES
            .iter()
            .map(|category| {
                Box::new(move || {
                    txt(category.category, theme::FG, Attr::BOLD);
                    muted(&category.skills.join(" · "));
                    spacer(1);
                }) as Box<dyn FnOnce()>
            })
            .collect();
        stagger_reveal(StaggerRevealProps::default(), entries);

        footer();
    })
}

// =============================================================================
// PROJECTS
// =============================================================================

fn projects_page() -> Cleanup {
    block(BlockProps { id: Some("page-projects".into()), ..Default::default() }, || {
        spacer(2);

        text_reveal(TextRevealProps { delay_ms: 100, ..Default::default() }, || {
            txt("WORK", theme::ACCENT, Attr::BOLD);
        });
        reveal(
            RevealProps { delay_ms: 300, distance_px: Some(20.0), ..Default::default() },
            || {
                muted("five products, designed and mostly built by one person");
            },
        );
        spacer(2);

        for (i, project) in PROJECTS.iter().enumerate() {
            reveal(RevealProps { distance_px: Some(30.0), ..Default::default() }, move || {
                txt(&format!("0{}", i + 1), theme::OUTLINE, Attr::BOLD);
                txt(project.title, theme::FG, Attr::BOLD);
                muted(project.subtitle);
                text(TextProps {
                    content: format!("{} · {}", project.role, project.platforms.join(", "))
                        .into(),
                    fg: theme::ACCENT_SOFT,
                    ..Default::default()
                });
                muted(&project.tech.join(" · "));
                spacer(2);
            });
        }

        reveal(RevealProps::default(), || {
            muted("enter/→ open a project · ← back");
        });

        footer();
    })
}

// =============================================================================
// PROJECT DETAIL
// =============================================================================

fn project_detail_page(project: &'static Project) -> Cleanup {
    block(BlockProps { id: Some("page-project".into()), ..Default::default() }, move || {
        spacer(2);

        scale_reveal(ScaleRevealProps { delay_ms: 100, ..Default::default() }, move || {
            txt(project.title, theme::ACCENT, Attr::BOLD);
        });
        text_reveal(TextRevealProps { delay_ms: 300, ..Default::default() }, move || {
            muted(project.subtitle);
        });
        spacer(1);

        let meta: Vec<Box<dyn FnOnce()>> = vec![
            Box::new(move || {
                label("ROLE");
                body(project.role);
                spacer(1);
            }),
            Box::new(move || {
                label("PLATFORMS");
                body(&project.platforms.join(", "));
                spacer(1);
            }),
            Box::new(move || {
                label("STACK");
                body(&project.tech.join(" · "));
                spacer(1);
            }),
        ];
        stagger_reveal(
            StaggerRevealProps { stagger_delay_ms: 120, base_delay_ms: 400, ..Default::default() },
            meta,
        );
        spacer(1);

        for (heading, copy) in [
            ("THE PROBLEM", project.problem),
            ("THE GOAL", project.goal),
            ("WHAT IT IS", project.description),
            ("DESIGN APPROACH", project.design_approach),
        ] {
            section_heading(heading, 0);
            reveal(RevealProps { distance_px: Some(30.0), ..Default::default() }, move || {
                body(copy);
                spacer(2);
            });
        }

        section_heading("FEATURES", 0);
        spacer(1);
        let features: Vec<Box<dyn FnOnce()>> = project
            .features
            .iter()
            .map(|feature| {
                Box::new(move || {
                    txt(
                        &format!("{:02}  {}", feature.number, feature.title),
                        theme::FG,
                        Attr::BOLD,
                    );
                    text(TextProps {
                        content: feature.description.into(),
                        fg: theme::MUTED,
                        indent: 4,
                        ..Default::default()
                    });
                    spacer(1);
                }) as Box<dyn FnOnce()>
            })
            .collect();
        stagger_reveal(
            StaggerRevealProps { stagger_delay_ms: 150, ..Default::default() },
            features,
        );
        spacer(1);

        section_heading("SCREENS", 0);
        spacer(1);
        let screens: Vec<Box<dyn FnOnce()>> = project
            .screenshots
            .iter()
            .map(|screenshot| {
                Box::new(move || {
                    txt(&format!("▢ {}", screenshot.label), theme::ACCENT_SOFT, Attr::empty());
                    text(TextProps {
                        content: screenshot.description.into(),
                        fg: theme::MUTED,
                        indent: 2,
                        ..Default::default()
                    });
                    spacer(1);
                }) as Box<dyn FnOnce()>
            })
            .collect();
        stagger_reveal(StaggerRevealProps::default(), screens);

        reveal(RevealProps::default(), || {
            muted("→ next project · ← all work");
        });

        footer();
    })
}

fn missing_page() -> Cleanup {
    block(BlockProps::default(), || {
        spacer(2);
        txt("404", theme::OUTLINE, Attr::BOLD);
        muted("that project moved · press 3 for the catalog");
    })
}

// =============================================================================
// BRANDS
// =============================================================================

fn brands_page() -> Cleanup {
    block(BlockProps { id: Some("page-brands".into()), ..Default::default() }, || {
        spacer(2);

        text_reveal(TextRevealProps { delay_ms: 100, ..Default::default() }, || {
            txt("BRANDS", theme::ACCENT, Attr::BOLD);
        });
        reveal(
            RevealProps { delay_ms: 300, distance_px: Some(20.0), ..Default::default() },
            || {
                muted("identity, landing pages and campaigns across six brands");
            },
        );
        spacer(2);

        for brand in BRANDS {
            reveal(RevealProps { distance_px: Some(30.0), ..Default::default() }, move || {
                txt(brand.name, theme::FG, Attr::BOLD);
                muted(brand.description);
                spacer(1);
            });

            let work: Vec<Box<dyn FnOnce()>> = brand
                .work
                .iter()
                .map(|item| {
                    Box::new(move || {
                        text(TextProps {
                            content: format!("[{}] {}", item.kind.label(), item.title).into(),
                            fg: theme::ACCENT_SOFT,
                            indent: 2,
                            ..Default::default()
                        });
                        text(TextProps {
                            content: item.description.into(),
                            fg: theme::MUTED,
                            indent: 6,
                            ..Default::default()
                        });
                    }) as Box<dyn FnOnce()>
                })
                .collect();
            stagger_reveal(
                StaggerRevealProps { stagger_delay_ms: 80, ..Default::default() },
                work,
            );
            spacer(2);
        }

        footer();
    })
}

// =============================================================================
// CONTACT
// =============================================================================

fn contact_page() -> Cleanup {
    block(BlockProps { id: Some("page-contact".into()), ..Default::default() }, || {
        spacer(2);

        scale_reveal(ScaleRevealProps { delay_ms: 100, ..Default::default() }, || {
            txt("L E T ' S", theme::OUTLINE, Attr::BOLD);
        });
        text_reveal(TextRevealProps { delay_ms: 300, ..Default::default() }, || {
            txt("T A L K", theme::ACCENT, Attr::BOLD);
        });
        spacer(1);

        marquee_reveal(
            MarqueeProps::default(),
            "LET'S WORK TOGETHER · AZUREM.UX@GMAIL.COM · SEATTLE, WA · ",
        );
        spacer(2);

        reveal(
            RevealProps { delay_ms: 400, distance_px: Some(20.0), ..Default::default() },
            || {
                rule(12, theme::ACCENT);
                label("GET IN TOUCH");
            },
        );
        spacer(1);

        reveal(
            RevealProps { delay_ms: 500, distance_px: Some(30.0), ..Default::default() },
            || {
                txt(PERSON.email, theme::ACCENT, Attr::BOLD);
                body("LinkedIn");
                muted(PERSON.location);
                spacer(2);
            },
        );

        let fields: Vec<Box<dyn FnOnce()>> = vec![
            Box::new(|| form_field("NAME", Field::Name)),
            Box::new(|| form_field("EMAIL", Field::Email)),
            Box::new(|| form_field("MESSAGE", Field::Message)),
            Box::new(|| {
                let focus = contact::focus();
                text(TextProps {
                    content: PropValue::Getter(Rc::new(move || {
                        if focus.get() == Field::Send {
                            "▸ SEND MESSAGE ◂".to_string()
                        } else {
                            "  SEND MESSAGE".to_string()
                        }
                    })),
                    fg: theme::ACCENT,
                    attrs: Attr::BOLD,
                    ..Default::default()
                });

                let status = contact::status();
                text(TextProps {
                    content: PropValue::Getter(Rc::new(move || {
                        match status.get() {
                            SubmitStatus::Idle => "tab focuses the form · enter sends".to_string(),
                            SubmitStatus::Sending => "sending…".to_string(),
                            SubmitStatus::Sent => "message sent — talk soon".to_string(),
                            SubmitStatus::Error => "something broke — try again".to_string(),
                        }
                    })),
                    fg: theme::MUTED,
                    ..Default::default()
                });
            }),
        ];
        stagger_reveal(
            StaggerRevealProps {
                stagger_delay_ms: 120,
                base_delay_ms: 500,
                distance_px: Some(30.0),
                ..Default::default()
            },
            fields,
        );

        footer();
    })
}

fn form_field(heading: &'static str, field: Field) {
    label(heading);
    let value = contact::field_signal(field);
    let focus = contact::focus();
    text(TextProps {
        content: PropValue::Getter(Rc::new(move || {
            let value = value.get();
            let cursor = if focus.get() == field { "▏" } else { "" };
            if value.is_empty() && cursor.is_empty() {
                "·".to_string()
            } else {
                format!("{value}{cursor}")
            }
        })),
        fg: theme::FG,
        ..Default::default()
    });
    spacer(1);
}

// =============================================================================
// TESTS
// =============================================================================
