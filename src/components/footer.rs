use leptos::*;

struct FooterColumn {
    title: &'static str,
    links: [&'static str; 4],
}

#[component]
pub fn Footer() -> impl IntoView {
    let columns = [
        FooterColumn {
            title: "ABOUT",
            links: ["How Staynest works", "Newsroom", "Investors", "Careers"],
        },
        FooterColumn {
            title: "COMMUNITY",
            links: ["Accessibility", "Referrals", "Gift cards", "Forum"],
        },
        FooterColumn {
            title: "HOST",
            links: ["Host your home", "Host an experience", "Responsible hosting", "Resource centre"],
        },
        FooterColumn {
            title: "SUPPORT",
            links: ["Help Centre", "Cancellation options", "Neighbourhood support", "Trust & safety"],
        },
    ];

    view! {
        <footer class="bg-gray-100 border-t border-gray-200 mt-16">
            <div class="container mx-auto px-4 py-12 grid grid-cols-2 md:grid-cols-4 gap-8">
                {columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div>
                                <h5 class="text-xs font-bold text-gray-900 mb-4">{column.title}</h5>
                                <ul class="space-y-3">
                                    {column
                                        .links
                                        .into_iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a href="#" class="text-sm text-gray-600 hover:underline">
                                                        {link}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="border-t border-gray-200 py-6 text-center text-sm text-gray-500">
                "© 2026 Staynest, Inc. · Privacy · Terms · Sitemap"
            </div>
        </footer>
    }
}
