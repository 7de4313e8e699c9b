// Built-in sample texts for trying the summarizer.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sample {
    pub title: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: [Sample; 3] = [
    Sample {
        title: "Artificial Intelligence Revolution",
        text: "Artificial intelligence (AI) is revolutionizing the way we work, live, and interact with technology. \
From machine learning algorithms that can predict consumer behavior to natural language processing systems that can understand and respond to human speech, AI is transforming industries across the globe. \
In healthcare, AI is being used to diagnose diseases more accurately and develop personalized treatment plans. \
In finance, AI algorithms are detecting fraud and making investment decisions. \
In transportation, autonomous vehicles powered by AI are becoming a reality. \
As AI continues to evolve, it promises to bring even more innovative solutions to complex problems, making our lives more efficient and productive.",
    },
    Sample {
        title: "Climate Change Challenge",
        text: "Climate change represents one of the most pressing challenges of our time, with far-reaching implications for ecosystems, human societies, and the global economy. \
Rising global temperatures, caused primarily by greenhouse gas emissions from human activities, are leading to more frequent and severe weather events, including hurricanes, droughts, and floods. \
The melting of polar ice caps and glaciers is contributing to rising sea levels, threatening coastal communities worldwide. \
To address this crisis, governments, businesses, and individuals must work together to reduce carbon emissions, transition to renewable energy sources, and implement sustainable practices. \
The Paris Agreement represents a significant step forward in global climate action, but much more needs to be done to limit global warming and protect our planet for future generations.",
    },
    Sample {
        title: "Future of Remote Work",
        text: "The COVID-19 pandemic has fundamentally transformed the way we think about work, accelerating the adoption of remote work practices across industries. \
Companies that once required physical presence have discovered that many tasks can be performed effectively from home, leading to increased flexibility and work-life balance for employees. \
This shift has also opened up new opportunities for businesses to access global talent pools and reduce overhead costs associated with maintaining large office spaces. \
However, remote work also presents challenges, including the need for robust digital infrastructure, effective communication tools, and strategies to maintain team cohesion and company culture. \
As we move forward, hybrid work models that combine remote and in-office work are likely to become the new standard, requiring organizations to adapt their management practices and invest in technology that supports distributed teams.",
    },
];

/// Pick a sample from a rotating seed (e.g. the current unix time in seconds).
pub fn sample_for(seed: u64) -> &'static Sample {
    &SAMPLES[(seed % SAMPLES.len() as u64) as usize]
}

/// The sample for the current wall-clock second.
pub fn rotating_sample() -> &'static Sample {
    sample_for(chrono::Utc::now().timestamp().unsigned_abs())
}
