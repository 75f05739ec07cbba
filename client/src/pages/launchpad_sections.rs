//! Content sections of the launchpad page, top to bottom.

use leptos::prelude::*;

use crate::components::content_card::{CardAccent, ContentCard};
use crate::components::layout::SectionWrapper;
use crate::components::pill::{Pill, PillVariant};
use crate::content::{AUDIENCES, BENEFITS, CREDIT_LINE, PROBLEMS, WAITLIST_URL};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <SectionWrapper padding_y=0>
            <div class="hero">
                <div class="hero__badge">
                    <span class="hero__badge-dot"></span>
                    <span class="hero__badge-text">"Filecoin Ecosystem"</span>
                </div>
                <h1 class="hero__title">"Strategy" <br/> "Launchpad"</h1>
                <p class="hero__tagline">"Without strategy, even the best technology ends up invisible."</p>
                <div class="hero__hint">
                    <span>"Scroll to begin"</span>
                    <span class="hero__hint-arrow">"↓"</span>
                </div>
            </div>
        </SectionWrapper>
    }
}

#[component]
pub fn ProblemSection() -> impl IntoView {
    view! {
        <SectionWrapper>
            <div class="section__lead">
                <Pill variant=PillVariant::Red>"Sound familiar?"</Pill>
            </div>
            <div class="stack">
                {PROBLEMS
                    .iter()
                    .map(|problem| {
                        view! {
                            <ContentCard accent=CardAccent::Red>
                                <p class="problem__main">{problem.main}</p>
                                <p class="problem__sub">{problem.sub}</p>
                            </ContentCard>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionWrapper>
    }
}

#[component]
pub fn RealitySection() -> impl IntoView {
    view! {
        <SectionWrapper>
            <div class="reality">
                <p class="reality__intro">
                    "The Filecoin ecosystem has funded hundreds of teams through ProPGF, RetroPGF, and dev grants."
                </p>
                <div class="reality__rule">
                    <p class="reality__headline">"The technology is world-class."</p>
                </div>
                <p class="reality__gap">
                    "But brilliant infrastructure with unclear positioning means slower adoption, lower "
                    "visibility, and reduced ecosystem impact."
                </p>
                <p class="reality__close">"The network can't grow if no one understands why they need it."</p>
            </div>
        </SectionWrapper>
    }
}

#[component]
pub fn VisionSection() -> impl IntoView {
    view! {
        <SectionWrapper>
            <div class="vision">
                <div class="vision__pill">
                    <Pill variant=PillVariant::Green>"Imagine"</Pill>
                </div>
                <p class="vision__line">
                    "Every storage provider, FVM builder, and infrastructure team could articulate exactly "
                    <span class="accent-green">"why their solution matters"</span>
                </p>
                <p class="vision__line vision__line--follow">
                    "— and " <span class="accent-green">"why enterprises should choose Filecoin"</span> "."
                </p>
            </div>
        </SectionWrapper>
    }
}

#[component]
pub fn SolutionSection() -> impl IntoView {
    view! {
        <SectionWrapper>
            <div class="section__lead">
                <div class="solution__pill">
                    <Pill>"The missing layer"</Pill>
                </div>
                <h2 class="solution__title">
                    "Strategic clarity is the missing layer"
                    <span class="accent-blue">" in the Filecoin stack."</span>
                </h2>
                <p class="solution__sub">"Get this right, and everything else gets easier:"</p>
            </div>
            <div class="benefit-grid">
                {BENEFITS
                    .iter()
                    .map(|benefit| {
                        view! {
                            <ContentCard>
                                <div class="benefit__icon">{benefit.icon}</div>
                                <h3 class="benefit__title">{benefit.title}</h3>
                                <p class="benefit__desc">{benefit.desc}</p>
                            </ContentCard>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionWrapper>
    }
}

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <SectionWrapper>
            <div class="cta">
                <div class="cta__pill">
                    <Pill>"You've arrived"</Pill>
                </div>
                <h2 class="cta__title">"Welcome to strategic clarity."</h2>
                <p class="cta__body">
                    "The Filecoin Strategy Launchpad brings enterprise-grade strategy methodology to ecosystem "
                    "teams — so you can turn technical excellence into market traction."
                </p>
                <div class="tag-row">
                    {AUDIENCES.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
                <a class="btn btn--primary" href=WAITLIST_URL target="_blank" rel="noopener noreferrer">
                    "Join the waitlist →"
                </a>
                <p class="cta__credit">{CREDIT_LINE}</p>
            </div>
        </SectionWrapper>
    }
}
