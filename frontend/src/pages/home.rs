use yew::prelude::*;

use crate::components::{
    approach::ApproachSection, faq::FaqSection, footer::Footer, hero::Hero,
    services::ServicesSection, team::TeamSection, tech_services::TechServices, work::WorkSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <ServicesSection />
            <TechServices />
            <WorkSection />
            <ApproachSection />
            <TeamSection />
            <FaqSection />
            <Footer />
        </main>
    }
}
