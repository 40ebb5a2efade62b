//! Static page content: profile, projects, and skills.
//!
//! Everything here is compile-time data; the page only iterates it.

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Technologies, shown as tags in this order.
    pub tech: &'static [&'static str],
    pub link: &'static str,
    /// Screenshot path, resolved by the asset handler.
    pub image: &'static str,
}

/// Who the page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static [&'static str],
    pub about: &'static [&'static str],
    pub photo: &'static str,
    /// Phone number in international form without `+`.
    pub phone: &'static str,
    pub footer_year: u16,
}

/// Outbound chat link template; `{phone}` is replaced by the profile number.
pub const WHATSAPP_URL_TEMPLATE: &str = "https://api.whatsapp.com/send?phone={phone}";

impl Profile {
    /// Contact call-to-action URL.
    pub fn whatsapp_url(&self) -> String {
        WHATSAPP_URL_TEMPLATE.replace("{phone}", self.phone)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Sansan Syahrul",
    role: "Full Stack Developer",
    intro: &[
        "Halo, saya Sansan Seorang Software Developer yang fokus membangun aplikasi web modern dengan kode yang rapi dan terstruktur.",
        "Saya terbiasa mengerjakan pengembangan backend, API, dan dashboard admin menggunakan teknologi web terkini.",
    ],
    about: &[
        "Saya adalah seorang software developer yang memiliki ketertarikan dalam membangun solusi digital menggunakan teknologi web modern. Saya berpengalaman dalam pengembangan backend, pembuatan REST API, serta dashboard admin yang mengutamakan performa dan struktur kode yang rapi.",
        "Saya menikmati proses memecahkan masalah dan menyusun logika sistem yang efisien. Tujuan saya adalah menciptakan aplikasi yang tidak hanya kuat secara teknis, tetapi juga mudah digunakan dan siap dikembangkan ke tahap selanjutnya.",
    ],
    photo: "/fotosaya.jpg",
    phone: "6285156031419",
    footer_year: 2024,
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Snookyt",
        description: "Platform e-commerce modern dengan fitur lengkap menggunakan Laravel dan Reactjs dengan memakai Mysql",
        tech: &["Reactjs", "javascript", "MySQL", "Tailwind CSS", "Laravel"],
        link: "#",
        image: "/projects/snookyt.png",
    },
    Project {
        title: "Inventori barang",
        description: "Aplikasi manajemen barang yang bisa mencatat setiap barang masuk dan keluar yang nanti laporannya bisa di export menjadi pdf",
        tech: &["Laravel", "MySQL", "Tailwind CSS"],
        link: "#",
        image: "/projects/inven.png",
    },
    Project {
        title: "Company Profile dengan CMS",
        description: "Sebuah Website Company Profile dengan CMS menggunakan Nextjs dimana semua asset gambar dan konten di atur dari dashboard admin",
        tech: &["Nextjs", "TypeScript", "prisma", "Tailwind CSS", "MySQL"],
        link: "#",
        image: "/projects/deposit.png",
    },
];

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Node.js",
    "Laravel",
    "MySQL",
    "Tailwind CSS",
    "php",
];
